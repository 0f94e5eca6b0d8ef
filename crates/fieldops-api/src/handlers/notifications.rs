//! Notification handlers

use axum::{
    extract::State,
    http::StatusCode,
    Json,
};
use fieldops_core::repositories::PersistenceGateway;
use fieldops_core::{NewNotification, Notification};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ApiError;
use crate::extract::{ApiJson, ApiQuery};
use crate::middleware::Tenant;
use crate::response::ItemsResponse;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ListNotificationsQuery {
    #[serde(default)]
    pub employee_id: String,
    #[serde(default)]
    pub unread_only: bool,
    pub limit: Option<i64>,
}

#[derive(Debug, Serialize)]
pub struct NotificationCreated {
    pub notification_id: Uuid,
}

/// POST /notifications
pub async fn create_notification<G: PersistenceGateway>(
    State(state): State<AppState<G>>,
    Tenant(tenant_id): Tenant,
    ApiJson(payload): ApiJson<NewNotification>,
) -> Result<(StatusCode, Json<NotificationCreated>), ApiError> {
    let notification = state.notifications.prepare(&tenant_id, payload)?;

    let mut session = state.gateway.open().await?;
    let notification_id = state.notifications.create(&mut session, notification).await?;

    Ok((StatusCode::CREATED, Json(NotificationCreated { notification_id })))
}

/// GET /notifications?employee_id=&unread_only=&limit=
pub async fn list_notifications<G: PersistenceGateway>(
    State(state): State<AppState<G>>,
    Tenant(tenant_id): Tenant,
    ApiQuery(query): ApiQuery<ListNotificationsQuery>,
) -> Result<Json<ItemsResponse<Notification>>, ApiError> {
    let filter = state
        .notifications
        .query(&query.employee_id, query.unread_only, query.limit)?;

    let mut session = state.gateway.open().await?;
    let items = state.notifications.list(&mut session, &tenant_id, &filter).await?;

    Ok(Json(ItemsResponse::new(items)))
}
