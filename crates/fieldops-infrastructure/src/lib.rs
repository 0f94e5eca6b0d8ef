//! # FieldOps Infrastructure
//! 
//! PostgreSQL implementations of the persistence gateway (adapters).

pub mod database;

pub use database::{create_pool, run_migrations, PgGateway, PgSession};
