//! Daily report entity

use chrono::{DateTime, NaiveDate, Utc};
use fieldops_shared::TenantId;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::DomainError;

/// One report per employee per day. The (tenant, employee, date) key is
/// assumed unique but not enforced here.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    #[serde(skip)]
    pub tenant_id: TenantId,
    pub employee_id: String,
    pub report_date: NaiveDate,
    pub content: String,
    pub attachment_s3_path: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NewReport {
    #[validate(length(min = 1, max = 255, message = "employee_id must be between 1 and 255 characters"))]
    pub employee_id: String,

    pub report_date: NaiveDate,

    #[validate(length(min = 1, max = 2000, message = "content must be between 1 and 2000 characters"))]
    pub content: String,

    pub attachment_s3_path: Option<String>,
}

impl Report {
    pub fn new(tenant_id: TenantId, input: NewReport) -> Result<Self, DomainError> {
        input.validate()?;

        Ok(Self {
            tenant_id,
            employee_id: input.employee_id,
            report_date: input.report_date,
            content: input.content,
            attachment_s3_path: input.attachment_s3_path,
            created_at: Utc::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_length_bound() {
        let input = NewReport {
            employee_id: "E-1".to_string(),
            report_date: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
            content: "x".repeat(2001),
            attachment_s3_path: None,
        };
        assert!(matches!(
            Report::new(TenantId::new("acme"), input),
            Err(DomainError::ValidationError(_))
        ));
    }

    #[test]
    fn test_create_report() {
        let input = NewReport {
            employee_id: "E-1".to_string(),
            report_date: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
            content: "Visited three sites".to_string(),
            attachment_s3_path: Some("s3://bucket/e-1/2024-05-01.jpg".to_string()),
        };
        let report = Report::new(TenantId::new("acme"), input).unwrap();
        assert_eq!(report.employee_id, "E-1");
        assert!(report.attachment_s3_path.is_some());
    }
}
