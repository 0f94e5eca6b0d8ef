// ============================================================================
// FieldOps Infrastructure - PostgreSQL Task Repository
// File: crates/fieldops-infrastructure/src/database/postgres/task_repo_impl.rs
// ============================================================================

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::FromRow;
use uuid::Uuid;

use fieldops_core::domain::{Task, TaskStatus};
use fieldops_core::error::DomainError;
use fieldops_core::repositories::TaskRepository;
use fieldops_shared::{ListLimit, TenantId};

use super::db_error;
use crate::database::gateway::PgSession;

// Internal row type for SQLx mapping
#[derive(Debug, FromRow)]
struct TaskRow {
    pub task_id: Uuid,
    pub tenant_id: String,
    pub project_id: String,
    pub task_name: String,
    pub due_date: NaiveDate,
    pub status: String,
    pub expected_value: i32,
    pub assignee_id: Option<String>,
}

impl TryFrom<TaskRow> for Task {
    type Error = DomainError;

    fn try_from(row: TaskRow) -> Result<Self, Self::Error> {
        let status = TaskStatus::from_str(&row.status).ok_or_else(|| {
            DomainError::DatabaseError(format!("unknown task status in row: {}", row.status))
        })?;

        Ok(Task {
            task_id: row.task_id,
            tenant_id: TenantId::new(row.tenant_id),
            project_id: row.project_id,
            task_name: row.task_name,
            due_date: row.due_date,
            status,
            expected_value: row.expected_value,
            assignee_id: row.assignee_id,
        })
    }
}

#[async_trait]
impl TaskRepository for PgSession {
    async fn insert_task(&mut self, task: &Task) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO tasks (
                tenant_id, task_id, project_id, task_name,
                due_date, status, expected_value, assignee_id
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#
        )
        .bind(task.tenant_id.as_str())
        .bind(task.task_id)
        .bind(&task.project_id)
        .bind(&task.task_name)
        .bind(task.due_date)
        .bind(task.status.as_str())
        .bind(task.expected_value)
        .bind(&task.assignee_id)
        .execute(&mut *self.conn)
        .await
        .map_err(db_error("inserting task"))?;

        Ok(())
    }

    async fn list_tasks(&mut self, tenant_id: &TenantId, limit: ListLimit) -> Result<Vec<Task>, DomainError> {
        let rows: Vec<TaskRow> = sqlx::query_as(
            r#"
            SELECT
                task_id, tenant_id, project_id, task_name,
                due_date, status, expected_value, assignee_id
            FROM tasks
            WHERE tenant_id = $1
            ORDER BY due_date ASC
            LIMIT $2
            "#
        )
        .bind(tenant_id.as_str())
        .bind(limit.get())
        .fetch_all(&mut *self.conn)
        .await
        .map_err(db_error("listing tasks"))?;

        rows.into_iter().map(Task::try_from).collect()
    }

    async fn find_task(&mut self, tenant_id: &TenantId, task_id: &Uuid) -> Result<Option<Task>, DomainError> {
        let row: Option<TaskRow> = sqlx::query_as(
            r#"
            SELECT
                task_id, tenant_id, project_id, task_name,
                due_date, status, expected_value, assignee_id
            FROM tasks
            WHERE tenant_id = $1 AND task_id = $2
            "#
        )
        .bind(tenant_id.as_str())
        .bind(task_id)
        .fetch_optional(&mut *self.conn)
        .await
        .map_err(db_error("finding task"))?;

        row.map(Task::try_from).transpose()
    }
}
