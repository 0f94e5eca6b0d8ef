// ============================================================================
// FieldOps API - Task Handlers
// File: crates/fieldops-api/src/handlers/tasks.rs
// ============================================================================
//! Task HTTP handlers (create, list, get)

use axum::{
    extract::{Path, State},
    Json,
};
use fieldops_core::repositories::PersistenceGateway;
use fieldops_core::{NewTask, Task};
use fieldops_shared::utils::parse_uuid;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ApiError;
use crate::extract::{ApiJson, ApiQuery};
use crate::middleware::Tenant;
use crate::response::ItemsResponse;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ListTasksQuery {
    pub limit: Option<i64>,
}

#[derive(Debug, Serialize)]
pub struct TaskCreated {
    pub task_id: Uuid,
}

/// POST /tasks
pub async fn create_task<G: PersistenceGateway>(
    State(state): State<AppState<G>>,
    Tenant(tenant_id): Tenant,
    ApiJson(payload): ApiJson<NewTask>,
) -> Result<Json<TaskCreated>, ApiError> {
    let task = state.tasks.prepare(&tenant_id, payload)?;

    let mut session = state.gateway.open().await?;
    let task_id = state.tasks.create(&mut session, task).await?;

    Ok(Json(TaskCreated { task_id }))
}

/// GET /tasks?limit=
pub async fn list_tasks<G: PersistenceGateway>(
    State(state): State<AppState<G>>,
    Tenant(tenant_id): Tenant,
    ApiQuery(query): ApiQuery<ListTasksQuery>,
) -> Result<Json<ItemsResponse<Task>>, ApiError> {
    let mut session = state.gateway.open().await?;
    let items = state.tasks.list(&mut session, &tenant_id, query.limit).await?;

    Ok(Json(ItemsResponse::new(items)))
}

/// GET /tasks/{task_id}
pub async fn get_task<G: PersistenceGateway>(
    State(state): State<AppState<G>>,
    Tenant(tenant_id): Tenant,
    Path(task_id): Path<String>,
) -> Result<Json<Task>, ApiError> {
    let task_id = parse_uuid(&task_id)
        .ok_or_else(|| ApiError::BadRequest("invalid task_id".to_string()))?;

    let mut session = state.gateway.open().await?;
    let task = state.tasks.get(&mut session, &tenant_id, &task_id).await?;

    Ok(Json(task))
}
