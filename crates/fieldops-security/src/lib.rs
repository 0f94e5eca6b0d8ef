//! # FieldOps Security
//! 
//! Identity claims decoding and tenant resolution.

pub mod claims;
pub mod tenant;

pub use claims::{ClaimsDecoder, ClaimsError, IdentityClaims};
pub use tenant::{TenantConfig, TenantError, TenantResolver};
