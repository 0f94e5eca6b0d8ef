//! Task repository trait (port)

use async_trait::async_trait;
use fieldops_shared::{ListLimit, TenantId};
use uuid::Uuid;

use crate::domain::Task;
use crate::error::DomainError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TaskRepository: Send {
    async fn insert_task(&mut self, task: &Task) -> Result<(), DomainError>;
    /// Ordered by due date, earliest first.
    async fn list_tasks(&mut self, tenant_id: &TenantId, limit: ListLimit) -> Result<Vec<Task>, DomainError>;
    async fn find_task(&mut self, tenant_id: &TenantId, task_id: &Uuid) -> Result<Option<Task>, DomainError>;
}
