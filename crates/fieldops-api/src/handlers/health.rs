use axum::Json;

use crate::response::OkResponse;

/// GET /health, GET /checkin/health
pub async fn health_check() -> Json<OkResponse> {
    Json(OkResponse::ok())
}
