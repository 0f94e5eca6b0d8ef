//! Persistence gateway (port)

use async_trait::async_trait;

use super::{CheckinRepository, NotificationRepository, ReportRepository, TaskRepository};
use crate::error::DomainError;

/// Everything a request may do against the store through one session.
pub trait Store: TaskRepository + ReportRepository + NotificationRepository + CheckinRepository + Send {}

impl<T> Store for T where
    T: TaskRepository + ReportRepository + NotificationRepository + CheckinRepository + Send
{
}

/// Hands out one session per request. The session owns its connection and
/// gives it back when dropped, so early returns release it too.
#[async_trait]
pub trait PersistenceGateway: Send + Sync + 'static {
    type Session: Store;

    async fn open(&self) -> Result<Self::Session, DomainError>;
}
