//! Employee notification entity

use chrono::{DateTime, Utc};
use fieldops_shared::{ListLimit, TenantId};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::error::DomainError;

#[derive(Debug, Clone, Serialize)]
pub struct Notification {
    pub notification_id: Uuid,
    #[serde(skip)]
    pub tenant_id: TenantId,
    #[serde(skip)]
    pub employee_id: String,
    pub message: String,
    pub is_read: bool,
    pub sent_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NewNotification {
    #[validate(length(min = 1, max = 255, message = "employee_id must be between 1 and 255 characters"))]
    pub employee_id: String,

    #[validate(length(min = 1, max = 200, message = "message must be between 1 and 200 characters"))]
    pub message: String,
}

/// Filter for listing one employee's notifications, newest first.
#[derive(Debug, Clone, PartialEq)]
pub struct NotificationQuery {
    pub employee_id: String,
    pub unread_only: bool,
    pub limit: ListLimit,
}

impl Notification {
    pub fn new(tenant_id: TenantId, input: NewNotification) -> Result<Self, DomainError> {
        input.validate()?;

        Ok(Self {
            notification_id: Uuid::new_v4(),
            tenant_id,
            employee_id: input.employee_id,
            message: input.message,
            is_read: false,
            sent_at: Utc::now(),
        })
    }
}
