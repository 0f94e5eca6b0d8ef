//! Domain errors

use thiserror::Error;
use validator::ValidationErrors;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("employee or department not found")]
    EmployeeOrDepartmentNotFound,

    #[error("task not found")]
    TaskNotFound,

    #[error("report not found")]
    ReportNotFound,

    #[error("checkin not found")]
    CheckinNotFound,

    #[error("invalid status")]
    InvalidTaskStatus(String),

    #[error("invalid recorded_at: {0}")]
    InvalidTimestamp(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl DomainError {
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            DomainError::EmployeeOrDepartmentNotFound
                | DomainError::TaskNotFound
                | DomainError::ReportNotFound
                | DomainError::CheckinNotFound
        )
    }

    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            DomainError::InvalidTaskStatus(_)
                | DomainError::InvalidTimestamp(_)
                | DomainError::ValidationError(_)
        )
    }
}

impl From<ValidationErrors> for DomainError {
    fn from(errors: ValidationErrors) -> Self {
        DomainError::ValidationError(errors.to_string())
    }
}
