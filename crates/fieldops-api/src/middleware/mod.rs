//! Request middleware and extractors

pub mod identity;
pub mod tenant;

pub use identity::attach_claims;
pub use tenant::Tenant;
