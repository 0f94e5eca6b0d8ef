//! Notification service

use fieldops_shared::constants::DEFAULT_NOTIFICATION_LIMIT;
use fieldops_shared::{ListLimit, TenantId};
use tracing::info;
use uuid::Uuid;

use crate::domain::{require_employee_id, NewNotification, Notification, NotificationQuery};
use crate::error::DomainError;
use crate::repositories::NotificationRepository;

#[derive(Debug, Clone, Default)]
pub struct NotificationService;

impl NotificationService {
    pub fn new() -> Self {
        Self
    }

    /// Validate the input and build an unread notification stamped now
    pub fn prepare(&self, tenant_id: &TenantId, input: NewNotification) -> Result<Notification, DomainError> {
        Notification::new(tenant_id.clone(), input)
    }

    pub async fn create<R: NotificationRepository>(
        &self,
        repo: &mut R,
        notification: Notification,
    ) -> Result<Uuid, DomainError> {
        repo.insert_notification(&notification).await?;

        info!(
            "Notification {} sent to {} (tenant {})",
            notification.notification_id, notification.employee_id, notification.tenant_id
        );
        Ok(notification.notification_id)
    }

    /// Build the list filter; the employee id is required.
    pub fn query(
        &self,
        employee_id: &str,
        unread_only: bool,
        limit: Option<i64>,
    ) -> Result<NotificationQuery, DomainError> {
        Ok(NotificationQuery {
            employee_id: require_employee_id(employee_id)?.to_string(),
            unread_only,
            limit: ListLimit::clamp(limit, DEFAULT_NOTIFICATION_LIMIT),
        })
    }

    pub async fn list<R: NotificationRepository>(
        &self,
        repo: &mut R,
        tenant_id: &TenantId,
        query: &NotificationQuery,
    ) -> Result<Vec<Notification>, DomainError> {
        repo.list_notifications(tenant_id, query).await
    }
}
