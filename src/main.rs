//! Car Key Tracker - Main Application Entry Point
//!
//! This is a REST API server for tracking physical car keys. Staff check keys
//! out to named drivers, check them back in, and read the log of both.
//!
//! # Architecture
//!
//! - **Web Framework**: Axum (async HTTP server)
//! - **Storage**: in-memory inventory behind a `tokio::sync::RwLock`
//! - **Format**: JSON requests/responses
//!
//! # Startup Flow
//!
//! 1. Load configuration from environment variables
//! 2. Load the demo fleet (unless `SEED_INVENTORY=false`)
//! 3. Build HTTP router with routes and middleware
//! 4. Start server on configured port

use car_key_tracker::{app, config, state::AppState};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging with tracing subscriber. Reads RUST_LOG environment variable (defaults to "info" level)
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    // Load configuration
    let config = config::Config::from_env()?;
    tracing::info!("Configuration loaded");

    let state = AppState::from_config(&config);
    {
        let inventory = state.inventory.read().await;
        let summary = inventory.summary();
        tracing::info!(
            keys = summary.total_keys,
            available = summary.available,
            in_use = summary.in_use,
            transactions = summary.total_transactions,
            "Inventory loaded"
        );
    }

    let app = app::build_router(state);

    // Bind to network address and start server
    let addr = format!("0.0.0.0:{}", config.server_port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
