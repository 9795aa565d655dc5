//! robogated - HTTP gateway for a fleet of robots.
//!
//! Exposes robots, their devices and connections, and lets clients invoke
//! named commands on them with a JSON parameter bundle.

mod api;
mod config;
mod error;
mod http;
mod metrics;
mod telemetry;

use crate::config::Config;
use robogate_fleet::RobotRegistry;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    // Load configuration
    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "robogate.toml".to_string());

    let config = Config::load(&config_path).map_err(|e| {
        error!(path = %config_path, error = %e, "Failed to load config");
        e
    })?;

    if let Err(errors) = crate::config::validation::validate(&config) {
        for e in &errors {
            error!(error = %e, "Invalid configuration");
        }
        anyhow::bail!("{} configuration error(s) in {}", errors.len(), config_path);
    }

    info!(server = %config.server.name, robots = config.robots.len(), "Starting robogated");

    let fleet = crate::config::build_fleet(&config).map_err(|e| {
        error!(error = %e, "Failed to build fleet");
        e
    })?;
    let robot_count = fleet.robots().len();

    // Convention: metrics_port = 0 disables the HTTP endpoint (used by tests).
    let metrics_port = config.server.metrics_port;
    if metrics_port == 0 {
        info!("Metrics disabled");
    } else {
        metrics::init();
        metrics::set_robots(robot_count);
        info!("Metrics initialized");

        tokio::spawn(async move {
            http::run_metrics_server(metrics_port).await;
        });
        info!(port = metrics_port, "Prometheus HTTP server started");
    }

    let app = api::router(Arc::new(fleet), config.auth.clone());
    if config.auth.is_some() {
        info!("HTTP Basic authentication enabled");
    }

    let listener = tokio::net::TcpListener::bind(config.listen.address).await?;
    http::serve_api(listener, app, shutdown_signal()).await?;

    info!("robogated stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
