//! Per-request persistence sessions

use async_trait::async_trait;
use sqlx::pool::PoolConnection;
use sqlx::{PgPool, Postgres};
use tracing::error;

use fieldops_core::error::DomainError;
use fieldops_core::repositories::PersistenceGateway;

#[derive(Clone)]
pub struct PgGateway {
    pool: PgPool,
}

impl PgGateway {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// One checked-out connection. Dropping the session returns it to the pool.
pub struct PgSession {
    pub(crate) conn: PoolConnection<Postgres>,
}

#[async_trait]
impl PersistenceGateway for PgGateway {
    type Session = PgSession;

    async fn open(&self) -> Result<PgSession, DomainError> {
        let conn = self.pool.acquire().await.map_err(|e| {
            error!("Failed to acquire database connection: {}", e);
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(PgSession { conn })
    }
}
