//! Task service

use fieldops_shared::constants::DEFAULT_TASK_LIMIT;
use fieldops_shared::{ListLimit, TenantId};
use tracing::{info, warn};
use uuid::Uuid;

use crate::domain::{NewTask, Task};
use crate::error::DomainError;
use crate::repositories::TaskRepository;

#[derive(Debug, Clone, Default)]
pub struct TaskService;

impl TaskService {
    pub fn new() -> Self {
        Self
    }

    /// Validate the input and build the task without touching the store
    pub fn prepare(&self, tenant_id: &TenantId, input: NewTask) -> Result<Task, DomainError> {
        Task::new(tenant_id.clone(), input).map_err(|e| {
            warn!("Task rejected for tenant {}: {}", tenant_id, e);
            e
        })
    }

    /// Insert a prepared task, returning its generated id
    pub async fn create<R: TaskRepository>(&self, repo: &mut R, task: Task) -> Result<Uuid, DomainError> {
        repo.insert_task(&task).await?;

        info!("Task {} created for tenant {}", task.task_id, task.tenant_id);
        Ok(task.task_id)
    }

    pub async fn list<R: TaskRepository>(
        &self,
        repo: &mut R,
        tenant_id: &TenantId,
        limit: Option<i64>,
    ) -> Result<Vec<Task>, DomainError> {
        let limit = ListLimit::clamp(limit, DEFAULT_TASK_LIMIT);
        repo.list_tasks(tenant_id, limit).await
    }

    pub async fn get<R: TaskRepository>(
        &self,
        repo: &mut R,
        tenant_id: &TenantId,
        task_id: &Uuid,
    ) -> Result<Task, DomainError> {
        repo.find_task(tenant_id, task_id)
            .await?
            .ok_or(DomainError::TaskNotFound)
    }
}
