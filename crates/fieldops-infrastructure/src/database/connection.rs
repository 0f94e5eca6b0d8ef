//! Database connection pool

use fieldops_shared::config::DatabaseSettings;
use sqlx::migrate::MigrateError;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::PgPool;
use std::time::Duration;
use tracing::info;

/// Builds connect options from `database.url`, or from the individual
/// host/port/user/password/name settings when no URL is given.
pub fn connect_options(settings: &DatabaseSettings) -> Result<PgConnectOptions, sqlx::Error> {
    if let Some(url) = settings.url.as_deref().filter(|u| !u.trim().is_empty()) {
        return url.parse::<PgConnectOptions>();
    }

    let mut options = PgConnectOptions::new()
        .host(&settings.host)
        .port(settings.port);

    if let Some(user) = &settings.user {
        options = options.username(user);
    }
    if let Some(password) = &settings.password {
        options = options.password(password);
    }
    if let Some(name) = &settings.name {
        options = options.database(name);
    }

    Ok(options)
}

pub async fn create_pool(settings: &DatabaseSettings) -> Result<PgPool, sqlx::Error> {
    let options = connect_options(settings)?;

    PgPoolOptions::new()
        .max_connections(settings.max_connections)
        .acquire_timeout(Duration::from_secs(settings.acquire_timeout_seconds))
        .connect_with(options)
        .await
}

pub async fn run_migrations(pool: &PgPool) -> Result<(), MigrateError> {
    info!("Applying database migrations");
    sqlx::migrate!("../../migrations").run(pool).await
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(url: Option<&str>) -> DatabaseSettings {
        DatabaseSettings {
            url: url.map(str::to_string),
            host: "db.internal".to_string(),
            port: 6543,
            user: Some("fieldops".to_string()),
            password: Some("s3cret".to_string()),
            name: Some("fieldops".to_string()),
            max_connections: 5,
            acquire_timeout_seconds: 3,
            run_migrations: false,
        }
    }

    #[test]
    fn test_options_from_parts() {
        let options = connect_options(&settings(None)).unwrap();
        assert_eq!(options.get_host(), "db.internal");
        assert_eq!(options.get_port(), 6543);
        assert_eq!(options.get_username(), "fieldops");
        assert_eq!(options.get_database(), Some("fieldops"));
    }

    #[test]
    fn test_url_takes_precedence() {
        let options = connect_options(&settings(Some("postgres://app@localhost:5432/ops"))).unwrap();
        assert_eq!(options.get_host(), "localhost");
        assert_eq!(options.get_port(), 5432);
        assert_eq!(options.get_database(), Some("ops"));
    }

    #[test]
    fn test_blank_url_ignored() {
        let options = connect_options(&settings(Some("  "))).unwrap();
        assert_eq!(options.get_host(), "db.internal");
    }
}
