//! Raybats HTTP Server Binary
//!
//! Serves the viewing-conditions REST API.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin raybats-server
//!
//! # With an explicit configuration file
//! RAYBATS_CONFIG=./raybats.toml cargo run --bin raybats-server
//! ```
//!
//! # Environment Variables
//!
//! - `RAYBATS_CONFIG`: Path to a TOML configuration file
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 8080)
//! - `RUST_LOG`: Log level (default: info)

use std::env;
use std::net::SocketAddr;
use std::sync::Arc;

use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use raybats::config::RaybatsConfig;
use raybats::http::{create_router, AppState};
use raybats::services::ConditionsService;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(true)
        .with_thread_ids(true)
        .init();

    info!("Starting Raybats HTTP Server");

    let config = RaybatsConfig::load()?;
    let service = Arc::new(ConditionsService::from_config(&config)?);
    info!(
        "Fallback observer {:.4}, {:.4}; search {}h every {} min",
        config.observer.latitude,
        config.observer.longitude,
        config.search.horizon_hours,
        config.search.step_minutes
    );

    let state = AppState::new(service, config.observer);
    let app = create_router(state);

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;

    info!("Server listening on http://{}", addr);
    info!("Health check: http://{}/health", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
