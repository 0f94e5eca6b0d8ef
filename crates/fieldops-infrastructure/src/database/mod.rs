//! Database module (PostgreSQL adapters)

pub mod connection;
pub mod gateway;
pub mod postgres;

pub use connection::{connect_options, create_pool, run_migrations};
pub use gateway::{PgGateway, PgSession};
