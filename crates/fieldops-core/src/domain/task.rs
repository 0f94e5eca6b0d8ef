// ============================================================================
// FieldOps Core - Task Entity
// File: crates/fieldops-core/src/domain/task.rs
// Description: Project task with TODO/DOING/DONE status
// ============================================================================

use chrono::NaiveDate;
use fieldops_shared::TenantId;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::error::DomainError;

/// Task status enumeration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TaskStatus {
    #[default]
    Todo,
    Doing,
    Done,
}

impl TaskStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Todo => "TODO",
            TaskStatus::Doing => "DOING",
            TaskStatus::Done => "DONE",
        }
    }

    /// Exact match only; "todo" or "CANCELLED" are rejected.
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "TODO" => Some(TaskStatus::Todo),
            "DOING" => Some(TaskStatus::Doing),
            "DONE" => Some(TaskStatus::Done),
            _ => None,
        }
    }
}

/// Task entity
#[derive(Debug, Clone, Serialize)]
pub struct Task {
    pub task_id: Uuid,
    #[serde(skip)]
    pub tenant_id: TenantId,
    pub project_id: String,
    pub task_name: String,
    pub due_date: NaiveDate,
    pub status: TaskStatus,
    pub expected_value: i32,
    pub assignee_id: Option<String>,
}

/// Task creation input
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NewTask {
    #[validate(length(min = 1, max = 50, message = "project_id must be between 1 and 50 characters"))]
    pub project_id: String,

    #[validate(length(min = 1, max = 50, message = "task_name must be between 1 and 50 characters"))]
    pub task_name: String,

    pub due_date: NaiveDate,

    #[validate(range(min = 0, message = "expected_value must not be negative"))]
    pub expected_value: i32,

    #[validate(length(max = 255, message = "assignee_id must be at most 255 characters"))]
    pub assignee_id: Option<String>,

    /// Kept as raw text so an unknown status surfaces as a domain error
    /// rather than a body parse failure.
    #[serde(default = "default_status")]
    pub status: String,
}

fn default_status() -> String {
    TaskStatus::default().as_str().to_string()
}

impl Task {
    pub fn new(tenant_id: TenantId, input: NewTask) -> Result<Self, DomainError> {
        input.validate()?;

        let status = TaskStatus::from_str(&input.status)
            .ok_or_else(|| DomainError::InvalidTaskStatus(input.status.clone()))?;

        Ok(Self {
            task_id: Uuid::new_v4(),
            tenant_id,
            project_id: input.project_id,
            task_name: input.task_name,
            due_date: input.due_date,
            status,
            expected_value: input.expected_value,
            assignee_id: input.assignee_id,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(status: &str) -> NewTask {
        NewTask {
            project_id: "P-100".to_string(),
            task_name: "Install racks".to_string(),
            due_date: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
            expected_value: 3,
            assignee_id: None,
            status: status.to_string(),
        }
    }

    #[test]
    fn test_create_task() {
        let task = Task::new(TenantId::new("acme"), input("DOING")).unwrap();
        assert_eq!(task.status, TaskStatus::Doing);
        assert_eq!(task.tenant_id.as_str(), "acme");
    }

    #[test]
    fn test_status_must_match_exactly() {
        assert!(TaskStatus::from_str("todo").is_none());
        let err = Task::new(TenantId::new("acme"), input("CANCELLED")).unwrap_err();
        assert!(matches!(err, DomainError::InvalidTaskStatus(s) if s == "CANCELLED"));
    }

    #[test]
    fn test_negative_expected_value_rejected() {
        let mut bad = input("TODO");
        bad.expected_value = -1;
        assert!(matches!(
            Task::new(TenantId::new("acme"), bad),
            Err(DomainError::ValidationError(_))
        ));
    }

    #[test]
    fn test_status_defaults_to_todo() {
        let json = r#"{"project_id":"P","task_name":"T","due_date":"2024-05-01","expected_value":0}"#;
        let parsed: NewTask = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.status, "TODO");
        assert_eq!(TaskStatus::default(), TaskStatus::Todo);
    }

    #[test]
    fn test_assignee_id_length() {
        let mut blank = input("TODO");
        blank.assignee_id = Some(String::new());
        let task = Task::new(TenantId::new("acme"), blank).unwrap();
        assert_eq!(task.assignee_id.as_deref(), Some(""));

        let mut long = input("TODO");
        long.assignee_id = Some("a".repeat(256));
        assert!(Task::new(TenantId::new("acme"), long).unwrap_err().is_validation());
    }

    #[test]
    fn test_serialized_shape() {
        let task = Task::new(TenantId::new("acme"), input("DONE")).unwrap();
        let value = serde_json::to_value(&task).unwrap();
        assert_eq!(value["status"], "DONE");
        assert_eq!(value["due_date"], "2024-05-01");
        assert!(value.get("tenant_id").is_none());
    }
}
