//! Tenant extractor

use axum::{extract::FromRequestParts, http::request::Parts};
use fieldops_core::repositories::PersistenceGateway;
use fieldops_security::IdentityClaims;
use fieldops_shared::TenantId;

use crate::error::ApiError;
use crate::state::AppState;

/// Tenant of the current request. Rejects with 401 when neither the claims nor
/// the configured fallback name one.
#[derive(Debug, Clone)]
pub struct Tenant(pub TenantId);

impl<G: PersistenceGateway> FromRequestParts<AppState<G>> for Tenant {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState<G>,
    ) -> Result<Self, Self::Rejection> {
        let claims = parts
            .extensions
            .get::<IdentityClaims>()
            .cloned()
            .unwrap_or_default();

        let tenant_id = state.tenants.resolve(&claims)?;
        Ok(Tenant(tenant_id))
    }
}
