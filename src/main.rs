//! Incident Relay Server
//!
//! Run with: cargo run
//!
//! Environment variables:
//! - WEBHOOK_URL: Chat webhook incidents are forwarded to (required)
//! - RELAY_HOST: Bind address (default: 0.0.0.0)
//! - RELAY_PORT: Port number (default: 8080)
//! - RUST_LOG: Log level (default: info)

use incident_relay::api::{run_server, ServerConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "incident_relay=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::from_env().map_err(|e| {
        tracing::error!(error = %e, "Invalid configuration");
        e
    })?;

    tracing::info!("Incident relay configuration:");
    tracing::info!("  Host: {}:{}", config.host, config.port);
    tracing::info!(
        "  Webhook: {}://{}{}",
        config.webhook_url.scheme(),
        config.webhook_url.host_str().unwrap_or("-"),
        config.webhook_url.path()
    );
    tracing::info!("  Version: {}", env!("CARGO_PKG_VERSION"));

    run_server(config).await
}
