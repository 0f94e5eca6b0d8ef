//! # FieldOps API
//! 
//! HTTP handlers, middleware, extractors, and router.

pub mod error;
pub mod extract;
pub mod handlers;
pub mod middleware;
pub mod response;
pub mod routes;
pub mod state;

#[cfg(test)]
mod test_support;

pub use error::ApiError;
pub use routes::build_router;
pub use state::AppState;
