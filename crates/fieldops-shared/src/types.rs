//! Common types

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants::{MAX_LIST_LIMIT, MIN_LIST_LIMIT};

/// Tenant isolation key carried by every query.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TenantId(String);

impl TenantId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TenantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Row limit for list endpoints, always within `MIN_LIST_LIMIT..=MAX_LIST_LIMIT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListLimit(i64);

impl ListLimit {
    pub fn clamp(requested: Option<i64>, default: i64) -> Self {
        Self(requested.unwrap_or(default).clamp(MIN_LIST_LIMIT, MAX_LIST_LIMIT))
    }

    pub fn get(self) -> i64 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_limit_defaults_when_absent() {
        assert_eq!(ListLimit::clamp(None, 50).get(), 50);
    }

    #[test]
    fn test_limit_clamped_to_bounds() {
        assert_eq!(ListLimit::clamp(Some(9999), 100).get(), 200);
        assert_eq!(ListLimit::clamp(Some(0), 100).get(), 1);
        assert_eq!(ListLimit::clamp(Some(-5), 100).get(), 1);
        assert_eq!(ListLimit::clamp(Some(200), 100).get(), 200);
    }

    #[test]
    fn test_tenant_id_serializes_as_plain_string() {
        let json = serde_json::to_string(&TenantId::new("acme")).unwrap();
        assert_eq!(json, "\"acme\"");
    }
}
