// ============================================================================
// FieldOps API - Identity Middleware
// File: crates/fieldops-api/src/middleware/identity.rs
// ============================================================================
//! Decodes the bearer token once per request and stores the claims in the
//! request extensions for downstream extractors.

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};
use fieldops_security::ClaimsDecoder;

use crate::error::ApiError;

pub async fn attach_claims(
    State(decoder): State<Arc<ClaimsDecoder>>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let header = request
        .headers()
        .get(AUTHORIZATION)
        .map(|value| value.to_str())
        .transpose()
        .map_err(|_| ApiError::Unauthorized("invalid authorization header".to_string()))?;

    let claims = decoder.from_authorization(header)?;
    request.extensions_mut().insert(claims);

    Ok(next.run(request).await)
}
