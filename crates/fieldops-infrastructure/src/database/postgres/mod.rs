//! PostgreSQL repository implementations

pub mod task_repo_impl;
pub mod report_repo_impl;
pub mod notification_repo_impl;
pub mod checkin_repo_impl;

use fieldops_core::error::DomainError;
use tracing::error;

/// Logs the failure with its context and wraps it as a domain error.
pub(crate) fn db_error(context: &'static str) -> impl FnOnce(sqlx::Error) -> DomainError {
    move |e| {
        error!("Database error {}: {}", context, e);
        DomainError::DatabaseError(e.to_string())
    }
}
