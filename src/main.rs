//! Rentwise Server: rental property search API.
//!
//! Main entry point that wires all crates together and starts the server.

use std::sync::Arc;

use tracing_subscriber::{EnvFilter, fmt};

use rentwise_api::{AppState, build_app, serve};
use rentwise_core::config::AppConfig;
use rentwise_core::error::AppError;
use rentwise_database::{DatabasePool, PropertyRepository, SearchCompiler};
use rentwise_service::PropertyService;

#[tokio::main]
async fn main() {
    let env = std::env::var("RENTWISE_ENV").unwrap_or_else(|_| "development".to_string());

    let config = match AppConfig::load(&env) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);
    tracing::info!(%env, "Configuration loaded");

    if let Err(e) = run(config).await {
        tracing::error!(error = %e, "Server error");
        std::process::exit(1);
    }
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_thread_ids(true)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }
}

/// Main server run function
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting Rentwise v{}", env!("CARGO_PKG_VERSION"));

    // ── Step 1: Database connection + migrations ─────────────────
    let db = DatabasePool::connect(&config.database).await?;

    if config.database.run_migrations {
        rentwise_database::migration::run_migrations(db.pool()).await?;
    }

    // ── Step 2: Services ─────────────────────────────────────────
    let compiler = SearchCompiler::from_config(&config.search);
    tracing::info!(radius_km = compiler.radius_km(), "Search compiler ready");

    let repository = PropertyRepository::new(db.pool().clone());
    let property_service = PropertyService::new(Arc::new(repository), compiler);

    // ── Step 3: HTTP server ──────────────────────────────────────
    let server_config = config.server.clone();
    let app = build_app(AppState::new(config, property_service));

    serve(app, &server_config).await?;

    db.close().await;
    tracing::info!("Rentwise server shut down");

    Ok(())
}
