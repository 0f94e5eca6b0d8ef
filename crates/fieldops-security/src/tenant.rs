//! Tenant resolution from identity claims

use fieldops_shared::constants::{CLAIM_CUSTOM_TENANT_ID, CLAIM_TENANT_ID};
use fieldops_shared::utils::non_blank;
use fieldops_shared::TenantId;
use thiserror::Error;

use crate::claims::IdentityClaims;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum TenantError {
    #[error("tenant_id missing")]
    Missing,
}

#[derive(Debug, Clone, Default)]
pub struct TenantConfig {
    /// Deployment-wide tenant used when the token carries none. Intended for
    /// single-tenant installs only.
    pub fallback: Option<String>,
}

#[derive(Debug, Clone)]
pub struct TenantResolver {
    config: TenantConfig,
}

impl TenantResolver {
    pub fn new(config: TenantConfig) -> Self {
        Self { config }
    }

    /// Custom claim first, then the standard claim, then the configured fallback.
    pub fn resolve(&self, claims: &IdentityClaims) -> Result<TenantId, TenantError> {
        [CLAIM_CUSTOM_TENANT_ID, CLAIM_TENANT_ID]
            .iter()
            .find_map(|name| claims.get_str(name).and_then(non_blank))
            .or_else(|| self.config.fallback.as_deref().and_then(non_blank))
            .map(TenantId::new)
            .ok_or(TenantError::Missing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Map, Value};

    fn claims(value: Value) -> IdentityClaims {
        match value {
            Value::Object(map) => IdentityClaims::from(map),
            _ => IdentityClaims::from(Map::new()),
        }
    }

    fn resolver(fallback: Option<&str>) -> TenantResolver {
        TenantResolver::new(TenantConfig {
            fallback: fallback.map(str::to_string),
        })
    }

    #[test]
    fn test_custom_claim_wins() {
        let c = claims(json!({ "custom:tenant_id": "acme", "tenant_id": "globex" }));
        let tenant = resolver(Some("fallback")).resolve(&c).unwrap();
        assert_eq!(tenant.as_str(), "acme");
    }

    #[test]
    fn test_standard_claim_used_when_custom_blank() {
        let c = claims(json!({ "custom:tenant_id": "  ", "tenant_id": "globex" }));
        let tenant = resolver(None).resolve(&c).unwrap();
        assert_eq!(tenant.as_str(), "globex");
    }

    #[test]
    fn test_fallback_used_without_claims() {
        let tenant = resolver(Some("single")).resolve(&IdentityClaims::default()).unwrap();
        assert_eq!(tenant.as_str(), "single");
    }

    #[test]
    fn test_fails_closed() {
        assert_eq!(
            resolver(None).resolve(&IdentityClaims::default()),
            Err(TenantError::Missing)
        );
        assert_eq!(
            resolver(Some("")).resolve(&claims(json!({ "tenant_id": "" }))),
            Err(TenantError::Missing)
        );
    }

    #[test]
    fn test_non_string_claim_ignored() {
        let c = claims(json!({ "tenant_id": 42 }));
        assert_eq!(resolver(None).resolve(&c), Err(TenantError::Missing));
    }
}
