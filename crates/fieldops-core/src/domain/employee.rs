//! Employee identifiers supplied in query strings

use fieldops_shared::utils::non_blank;

use crate::error::DomainError;

/// Trimmed employee id, or a validation error when it is blank.
pub fn require_employee_id(raw: &str) -> Result<&str, DomainError> {
    non_blank(raw).ok_or_else(|| DomainError::ValidationError("employee_id is required".to_string()))
}
