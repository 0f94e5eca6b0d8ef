//! Notification repository trait (port)

use async_trait::async_trait;
use fieldops_shared::TenantId;

use crate::domain::{Notification, NotificationQuery};
use crate::error::DomainError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait NotificationRepository: Send {
    async fn insert_notification(&mut self, notification: &Notification) -> Result<(), DomainError>;
    /// Ordered by sent time, newest first.
    async fn list_notifications(
        &mut self,
        tenant_id: &TenantId,
        query: &NotificationQuery,
    ) -> Result<Vec<Notification>, DomainError>;
}
