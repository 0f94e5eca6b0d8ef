//! Report repository trait (port)

use async_trait::async_trait;
use chrono::NaiveDate;
use fieldops_shared::{ListLimit, TenantId};

use crate::domain::Report;
use crate::error::DomainError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReportRepository: Send {
    async fn insert_report(&mut self, report: &Report) -> Result<(), DomainError>;
    /// Ordered by report date, newest first.
    async fn list_reports(&mut self, tenant_id: &TenantId, limit: ListLimit) -> Result<Vec<Report>, DomainError>;
    async fn find_report(
        &mut self,
        tenant_id: &TenantId,
        employee_id: &str,
        report_date: NaiveDate,
    ) -> Result<Option<Report>, DomainError>;
}
