// ============================================================================
// FieldOps API - Check-in Handlers
// File: crates/fieldops-api/src/handlers/checkin.rs
// ============================================================================
//! Start/end check-ins and the latest-check-in lookup

use axum::{
    extract::State,
    Json,
};
use fieldops_core::repositories::PersistenceGateway;
use fieldops_core::{require_employee_id, Checkin, CheckinInput, CheckinReceipt, CheckinType};
use serde::Deserialize;

use crate::error::ApiError;
use crate::extract::{ApiJson, ApiQuery};
use crate::middleware::Tenant;
use crate::response::ItemResponse;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct LatestCheckinQuery {
    #[serde(default)]
    pub employee_id: String,
}

/// POST /checkin/start
pub async fn checkin_start<G: PersistenceGateway>(
    state: State<AppState<G>>,
    tenant: Tenant,
    payload: ApiJson<CheckinInput>,
) -> Result<Json<CheckinReceipt>, ApiError> {
    record(state, tenant, CheckinType::Start, payload).await
}

/// POST /checkin/end
pub async fn checkin_end<G: PersistenceGateway>(
    state: State<AppState<G>>,
    tenant: Tenant,
    payload: ApiJson<CheckinInput>,
) -> Result<Json<CheckinReceipt>, ApiError> {
    record(state, tenant, CheckinType::End, payload).await
}

async fn record<G: PersistenceGateway>(
    State(state): State<AppState<G>>,
    Tenant(tenant_id): Tenant,
    checkin_type: CheckinType,
    ApiJson(payload): ApiJson<CheckinInput>,
) -> Result<Json<CheckinReceipt>, ApiError> {
    let request = state.checkins.prepare(payload)?;

    let mut session = state.gateway.open().await?;
    let receipt = state
        .checkins
        .record(&mut session, &tenant_id, checkin_type, request)
        .await?;

    Ok(Json(receipt))
}

/// GET /checkin/latest?employee_id=
pub async fn latest_checkin<G: PersistenceGateway>(
    State(state): State<AppState<G>>,
    Tenant(tenant_id): Tenant,
    ApiQuery(query): ApiQuery<LatestCheckinQuery>,
) -> Result<Json<ItemResponse<Checkin>>, ApiError> {
    let employee_id = require_employee_id(&query.employee_id)?;

    let mut session = state.gateway.open().await?;
    let checkin = state
        .checkins
        .latest(&mut session, &tenant_id, employee_id)
        .await?;

    Ok(Json(ItemResponse::new(checkin)))
}
