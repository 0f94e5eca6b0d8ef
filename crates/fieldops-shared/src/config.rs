//! Configuration management

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;

use crate::constants::DEFAULT_CHECKIN_RADIUS_METERS;

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub app: AppSettings,
    pub database: DatabaseSettings,
    #[serde(default)]
    pub auth: AuthSettings,
    pub checkin: CheckinSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppSettings {
    pub env: String,
    pub host: String,
    pub port: u16,
    pub name: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseSettings {
    /// Full connection URL. Takes precedence over the individual parts below.
    pub url: Option<String>,
    pub host: String,
    pub port: u16,
    pub user: Option<String>,
    pub password: Option<String>,
    pub name: Option<String>,
    pub max_connections: u32,
    pub acquire_timeout_seconds: u64,
    pub run_migrations: bool,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct AuthSettings {
    /// HS256 secret for verifying identity tokens. When unset, tokens are
    /// trusted as already verified by the upstream gateway.
    pub jwt_secret: Option<String>,
    pub tenant_fallback: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct CheckinSettings {
    pub radius_meters: f64,
}

// Environment variable names used by earlier deployments.
const LEGACY_OVERRIDES: &[(&str, &str)] = &[
    ("auth.tenant_fallback", "TENANT_ID_FALLBACK"),
    ("checkin.radius_meters", "CHECKIN_RADIUS_METERS"),
    ("database.host", "DB_HOST"),
    ("database.port", "DB_PORT"),
    ("database.user", "DB_USER"),
    ("database.password", "DB_PASSWORD"),
    ("database.name", "DB_NAME"),
];

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        let env = std::env::var("APP_ENV").unwrap_or_else(|_| "development".into());
        let mut builder = Self::defaults()?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(
                Environment::with_prefix("FIELDOPS")
                    .separator("__")
                    .try_parsing(true),
            );

        for (key, var) in LEGACY_OVERRIDES {
            builder = builder.set_override_option(*key, std::env::var(var).ok())?;
        }

        builder.build()?.try_deserialize()
    }

    fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        Config::builder()
            .set_default("app.env", "development")?
            .set_default("app.host", "127.0.0.1")?
            .set_default("app.port", 8080)?
            .set_default("app.name", "fieldops-server")?
            .set_default("database.host", "localhost")?
            .set_default("database.port", 5432)?
            .set_default("database.max_connections", 10)?
            .set_default("database.acquire_timeout_seconds", 3)?
            .set_default("database.run_migrations", false)?
            .set_default("checkin.radius_meters", DEFAULT_CHECKIN_RADIUS_METERS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::FileFormat;

    fn from_toml(toml: &str) -> AppConfig {
        AppConfig::defaults()
            .unwrap()
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap()
    }

    #[test]
    fn test_defaults_apply() {
        let config = from_toml("");
        assert_eq!(config.app.port, 8080);
        assert_eq!(config.checkin.radius_meters, 200.0);
        assert_eq!(config.database.port, 5432);
        assert!(config.database.url.is_none());
        assert!(config.auth.tenant_fallback.is_none());
        assert!(!config.database.run_migrations);
    }

    #[test]
    fn test_file_values_override_defaults() {
        let config = from_toml(
            r#"
            [auth]
            tenant_fallback = "acme"

            [checkin]
            radius_meters = 350.5

            [database]
            url = "postgres://fieldops@db/fieldops"
            "#,
        );
        assert_eq!(config.auth.tenant_fallback.as_deref(), Some("acme"));
        assert_eq!(config.checkin.radius_meters, 350.5);
        assert_eq!(config.database.url.as_deref(), Some("postgres://fieldops@db/fieldops"));
    }
}
