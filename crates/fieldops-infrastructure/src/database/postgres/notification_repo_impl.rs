//! PostgreSQL notification repository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use fieldops_core::domain::{Notification, NotificationQuery};
use fieldops_core::error::DomainError;
use fieldops_core::repositories::NotificationRepository;
use fieldops_shared::TenantId;

use super::db_error;
use crate::database::gateway::PgSession;

#[derive(Debug, FromRow)]
struct NotificationRow {
    pub notification_id: Uuid,
    pub tenant_id: String,
    pub employee_id: String,
    pub message: String,
    pub is_read: bool,
    pub sent_at: DateTime<Utc>,
}

impl From<NotificationRow> for Notification {
    fn from(row: NotificationRow) -> Self {
        Notification {
            notification_id: row.notification_id,
            tenant_id: TenantId::new(row.tenant_id),
            employee_id: row.employee_id,
            message: row.message,
            is_read: row.is_read,
            sent_at: row.sent_at,
        }
    }
}

#[async_trait]
impl NotificationRepository for PgSession {
    async fn insert_notification(&mut self, notification: &Notification) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO notifications (
                tenant_id, employee_id, notification_id, message, is_read, sent_at
            )
            VALUES ($1, $2, $3, $4, $5, $6)
            "#
        )
        .bind(notification.tenant_id.as_str())
        .bind(&notification.employee_id)
        .bind(notification.notification_id)
        .bind(&notification.message)
        .bind(notification.is_read)
        .bind(notification.sent_at)
        .execute(&mut *self.conn)
        .await
        .map_err(db_error("inserting notification"))?;

        Ok(())
    }

    async fn list_notifications(
        &mut self,
        tenant_id: &TenantId,
        query: &NotificationQuery,
    ) -> Result<Vec<Notification>, DomainError> {
        let rows: Vec<NotificationRow> = sqlx::query_as(
            r#"
            SELECT notification_id, tenant_id, employee_id, message, is_read, sent_at
            FROM notifications
            WHERE tenant_id = $1
              AND employee_id = $2
              AND ($3 = FALSE OR is_read = FALSE)
            ORDER BY sent_at DESC
            LIMIT $4
            "#
        )
        .bind(tenant_id.as_str())
        .bind(&query.employee_id)
        .bind(query.unread_only)
        .bind(query.limit.get())
        .fetch_all(&mut *self.conn)
        .await
        .map_err(db_error("listing notifications"))?;

        Ok(rows.into_iter().map(Notification::from).collect())
    }
}
