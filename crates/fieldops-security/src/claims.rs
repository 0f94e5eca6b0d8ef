//! Identity claims carried on inbound requests

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde_json::{Map, Value};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClaimsError {
    #[error("Unsupported authorization scheme")]
    UnsupportedScheme,
    #[error("Malformed identity token")]
    Malformed,
    #[error("Token validation failed: {0}")]
    ValidationError(String),
}

/// Claim set of an identity token. Empty when the request carried no token.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IdentityClaims(Map<String, Value>);

impl IdentityClaims {
    pub fn get_str(&self, name: &str) -> Option<&str> {
        self.0.get(name).and_then(Value::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Map<String, Value>> for IdentityClaims {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

enum Verification {
    Hs256 {
        key: DecodingKey,
        validation: Validation,
    },
    /// Signature and expiry were already checked by the gateway in front of us.
    Upstream,
}

pub struct ClaimsDecoder {
    verification: Verification,
}

impl ClaimsDecoder {
    pub fn new(secret: Option<&str>) -> Self {
        let verification = match secret {
            Some(secret) => Verification::Hs256 {
                key: DecodingKey::from_secret(secret.as_bytes()),
                validation: Validation::new(Algorithm::HS256),
            },
            None => Verification::Upstream,
        };
        Self { verification }
    }

    pub fn verifies_signature(&self) -> bool {
        matches!(self.verification, Verification::Hs256 { .. })
    }

    /// Decodes the value of an `Authorization` header. A missing header is not
    /// an error here; tenant resolution decides whether anonymous is acceptable.
    pub fn from_authorization(&self, header: Option<&str>) -> Result<IdentityClaims, ClaimsError> {
        let Some(value) = header else {
            return Ok(IdentityClaims::default());
        };

        let token = value
            .strip_prefix("Bearer ")
            .or_else(|| value.strip_prefix("bearer "))
            .ok_or(ClaimsError::UnsupportedScheme)?
            .trim();

        if token.is_empty() {
            return Err(ClaimsError::Malformed);
        }

        self.decode(token)
    }

    pub fn decode(&self, token: &str) -> Result<IdentityClaims, ClaimsError> {
        match &self.verification {
            Verification::Hs256 { key, validation } => {
                decode::<Map<String, Value>>(token, key, validation)
                    .map(|data| data.claims.into())
                    .map_err(|e| ClaimsError::ValidationError(e.to_string()))
            }
            Verification::Upstream => decode_payload(token),
        }
    }
}

fn decode_payload(token: &str) -> Result<IdentityClaims, ClaimsError> {
    let mut segments = token.split('.');
    let payload = match (segments.next(), segments.next(), segments.next(), segments.next()) {
        (Some(_), Some(payload), Some(_), None) => payload,
        _ => return Err(ClaimsError::Malformed),
    };

    let bytes = URL_SAFE_NO_PAD
        .decode(payload.trim_end_matches('='))
        .map_err(|_| ClaimsError::Malformed)?;

    serde_json::from_slice::<Map<String, Value>>(&bytes)
        .map(IdentityClaims::from)
        .map_err(|_| ClaimsError::Malformed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::{encode, EncodingKey, Header};
    use serde_json::json;

    fn token(secret: &str, claims: Value) -> String {
        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .unwrap()
    }

    fn future_exp() -> i64 {
        chrono::Utc::now().timestamp() + 3600
    }

    #[test]
    fn test_missing_header_yields_empty_claims() {
        let decoder = ClaimsDecoder::new(Some("secret"));
        let claims = decoder.from_authorization(None).unwrap();
        assert!(claims.is_empty());
    }

    #[test]
    fn test_verified_token_decodes() {
        let decoder = ClaimsDecoder::new(Some("secret"));
        let jwt = token("secret", json!({ "tenant_id": "acme", "exp": future_exp() }));

        let claims = decoder.from_authorization(Some(&format!("Bearer {}", jwt))).unwrap();
        assert_eq!(claims.get_str("tenant_id"), Some("acme"));
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let decoder = ClaimsDecoder::new(Some("secret"));
        let jwt = token("other", json!({ "tenant_id": "acme", "exp": future_exp() }));

        let result = decoder.decode(&jwt);
        assert!(matches!(result, Err(ClaimsError::ValidationError(_))));
    }

    #[test]
    fn test_upstream_mode_reads_payload_without_verifying() {
        let decoder = ClaimsDecoder::new(None);
        assert!(!decoder.verifies_signature());
        let jwt = token("whatever", json!({ "custom:tenant_id": "globex", "exp": future_exp() }));

        let claims = decoder.decode(&jwt).unwrap();
        assert_eq!(claims.get_str("custom:tenant_id"), Some("globex"));
    }

    #[test]
    fn test_non_bearer_scheme_rejected() {
        let decoder = ClaimsDecoder::new(None);
        let result = decoder.from_authorization(Some("Basic dXNlcjpwYXNz"));
        assert!(matches!(result, Err(ClaimsError::UnsupportedScheme)));
    }

    #[test]
    fn test_garbage_token_rejected() {
        let decoder = ClaimsDecoder::new(None);
        assert!(matches!(decoder.decode("not-a-jwt"), Err(ClaimsError::Malformed)));
        assert!(matches!(decoder.decode("a.b.c"), Err(ClaimsError::Malformed)));
        assert!(matches!(
            decoder.from_authorization(Some("Bearer   ")),
            Err(ClaimsError::Malformed)
        ));
    }
}
