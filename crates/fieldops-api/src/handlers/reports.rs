//! Daily report handlers

use axum::{
    extract::{Path, State},
    Json,
};
use chrono::NaiveDate;
use fieldops_core::repositories::PersistenceGateway;
use fieldops_core::{NewReport, Report};
use serde::Deserialize;

use crate::error::ApiError;
use crate::extract::{ApiJson, ApiQuery};
use crate::middleware::Tenant;
use crate::response::{ItemResponse, ItemsResponse, OkResponse};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ListReportsQuery {
    pub limit: Option<i64>,
}

/// POST /reports
pub async fn create_report<G: PersistenceGateway>(
    State(state): State<AppState<G>>,
    Tenant(tenant_id): Tenant,
    ApiJson(payload): ApiJson<NewReport>,
) -> Result<Json<OkResponse>, ApiError> {
    let report = state.reports.prepare(&tenant_id, payload)?;

    let mut session = state.gateway.open().await?;
    state.reports.create(&mut session, report).await?;

    Ok(Json(OkResponse::ok()))
}

/// GET /reports?limit=
pub async fn list_reports<G: PersistenceGateway>(
    State(state): State<AppState<G>>,
    Tenant(tenant_id): Tenant,
    ApiQuery(query): ApiQuery<ListReportsQuery>,
) -> Result<Json<ItemsResponse<Report>>, ApiError> {
    let mut session = state.gateway.open().await?;
    let items = state.reports.list(&mut session, &tenant_id, query.limit).await?;

    Ok(Json(ItemsResponse::new(items)))
}

/// GET /reports/{employee_id}/{report_date}
pub async fn get_report<G: PersistenceGateway>(
    State(state): State<AppState<G>>,
    Tenant(tenant_id): Tenant,
    Path((employee_id, report_date)): Path<(String, String)>,
) -> Result<Json<ItemResponse<Report>>, ApiError> {
    let report_date = NaiveDate::parse_from_str(&report_date, "%Y-%m-%d")
        .map_err(|_| ApiError::BadRequest("invalid report_date".to_string()))?;

    let mut session = state.gateway.open().await?;
    let report = state
        .reports
        .get(&mut session, &tenant_id, &employee_id, report_date)
        .await?;

    Ok(Json(ItemResponse::new(report)))
}
