use std::net::SocketAddr;

use fieldops_api::{build_router, AppState};
use fieldops_infrastructure::{create_pool, run_migrations, PgGateway};
use fieldops_shared::config::AppConfig;
use tracing::{error, info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env
    dotenvy::dotenv().ok();

    // Initialize telemetry
    let _guard = fieldops_shared::telemetry::init_telemetry()?;

    info!("FieldOps server starting...");

    // Load configuration
    let config = match AppConfig::load() {
        Ok(c) => c,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    // Connect to Database
    info!(
        "Connecting to database at {}:{}...",
        config.database.host, config.database.port
    );
    let pool = create_pool(&config.database).await?;
    info!("Database connection established.");

    if config.database.run_migrations {
        run_migrations(&pool).await?;
        info!("Migrations applied.");
    }

    // Create App State
    let state = AppState::from_config(PgGateway::new(pool), &config);

    if !state.claims.verifies_signature() {
        warn!("auth.jwt_secret is not set; identity tokens are trusted without signature verification");
    }
    if let Some(fallback) = &config.auth.tenant_fallback {
        warn!("Requests without a tenant claim fall back to tenant {}", fallback);
    }
    info!("Check-in radius: {}m", state.checkins.radius_meters());

    let app = build_router(state);

    // Bind address
    let host: std::net::IpAddr = config.app.host.parse()?;
    let addr = SocketAddr::from((host, config.app.port));
    info!("Listening on {}", addr);

    // Start server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("FieldOps server stopped.");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
    }
    info!("Shutdown signal received.");
}
