//! Report service

use chrono::NaiveDate;
use fieldops_shared::constants::DEFAULT_REPORT_LIMIT;
use fieldops_shared::{ListLimit, TenantId};
use tracing::info;

use crate::domain::{NewReport, Report};
use crate::error::DomainError;
use crate::repositories::ReportRepository;

#[derive(Debug, Clone, Default)]
pub struct ReportService;

impl ReportService {
    pub fn new() -> Self {
        Self
    }

    /// Validate the input and stamp `created_at`
    pub fn prepare(&self, tenant_id: &TenantId, input: NewReport) -> Result<Report, DomainError> {
        Report::new(tenant_id.clone(), input)
    }

    pub async fn create<R: ReportRepository>(&self, repo: &mut R, report: Report) -> Result<(), DomainError> {
        repo.insert_report(&report).await?;

        info!(
            "Report for {} on {} stored for tenant {}",
            report.employee_id, report.report_date, report.tenant_id
        );
        Ok(())
    }

    pub async fn list<R: ReportRepository>(
        &self,
        repo: &mut R,
        tenant_id: &TenantId,
        limit: Option<i64>,
    ) -> Result<Vec<Report>, DomainError> {
        let limit = ListLimit::clamp(limit, DEFAULT_REPORT_LIMIT);
        repo.list_reports(tenant_id, limit).await
    }

    pub async fn get<R: ReportRepository>(
        &self,
        repo: &mut R,
        tenant_id: &TenantId,
        employee_id: &str,
        report_date: NaiveDate,
    ) -> Result<Report, DomainError> {
        repo.find_report(tenant_id, employee_id, report_date)
            .await?
            .ok_or(DomainError::ReportNotFound)
    }
}
