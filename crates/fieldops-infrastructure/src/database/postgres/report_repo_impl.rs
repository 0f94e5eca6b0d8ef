//! PostgreSQL report repository

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::FromRow;

use fieldops_core::domain::Report;
use fieldops_core::error::DomainError;
use fieldops_core::repositories::ReportRepository;
use fieldops_shared::{ListLimit, TenantId};

use super::db_error;
use crate::database::gateway::PgSession;

#[derive(Debug, FromRow)]
struct ReportRow {
    pub tenant_id: String,
    pub employee_id: String,
    pub report_date: NaiveDate,
    pub content: String,
    pub attachment_s3_path: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<ReportRow> for Report {
    fn from(row: ReportRow) -> Self {
        Report {
            tenant_id: TenantId::new(row.tenant_id),
            employee_id: row.employee_id,
            report_date: row.report_date,
            content: row.content,
            attachment_s3_path: row.attachment_s3_path,
            created_at: row.created_at,
        }
    }
}

#[async_trait]
impl ReportRepository for PgSession {
    async fn insert_report(&mut self, report: &Report) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO reports (
                tenant_id, employee_id, report_date, content, attachment_s3_path, created_at
            )
            VALUES ($1, $2, $3, $4, $5, $6)
            "#
        )
        .bind(report.tenant_id.as_str())
        .bind(&report.employee_id)
        .bind(report.report_date)
        .bind(&report.content)
        .bind(&report.attachment_s3_path)
        .bind(report.created_at)
        .execute(&mut *self.conn)
        .await
        .map_err(db_error("inserting report"))?;

        Ok(())
    }

    async fn list_reports(&mut self, tenant_id: &TenantId, limit: ListLimit) -> Result<Vec<Report>, DomainError> {
        let rows: Vec<ReportRow> = sqlx::query_as(
            r#"
            SELECT tenant_id, employee_id, report_date, content, attachment_s3_path, created_at
            FROM reports
            WHERE tenant_id = $1
            ORDER BY report_date DESC
            LIMIT $2
            "#
        )
        .bind(tenant_id.as_str())
        .bind(limit.get())
        .fetch_all(&mut *self.conn)
        .await
        .map_err(db_error("listing reports"))?;

        Ok(rows.into_iter().map(Report::from).collect())
    }

    async fn find_report(
        &mut self,
        tenant_id: &TenantId,
        employee_id: &str,
        report_date: NaiveDate,
    ) -> Result<Option<Report>, DomainError> {
        let row: Option<ReportRow> = sqlx::query_as(
            r#"
            SELECT tenant_id, employee_id, report_date, content, attachment_s3_path, created_at
            FROM reports
            WHERE tenant_id = $1 AND employee_id = $2 AND report_date = $3
            LIMIT 1
            "#
        )
        .bind(tenant_id.as_str())
        .bind(employee_id)
        .bind(report_date)
        .fetch_optional(&mut *self.conn)
        .await
        .map_err(db_error("finding report"))?;

        Ok(row.map(Report::from))
    }
}
