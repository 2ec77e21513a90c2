use axum::{
    routing::{get, post},
    Router,
};
use reqwest::Url;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use super::handlers::{health_check, relay_incident, AppState};
use crate::alerts::Notifier;

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Chat webhook every incident is forwarded to
    pub webhook_url: Url,
}

impl ServerConfig {
    pub fn new(webhook_url: Url) -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            webhook_url,
        }
    }

    /// Load from `WEBHOOK_URL`, `RELAY_HOST` and `RELAY_PORT`
    pub fn from_env() -> Result<Self, ConfigError> {
        let raw_url = std::env::var("WEBHOOK_URL").map_err(|_| ConfigError::MissingWebhookUrl)?;
        let webhook_url = parse_webhook_url(&raw_url)?;

        let mut config = Self::new(webhook_url);
        if let Ok(host) = std::env::var("RELAY_HOST") {
            config.host = host;
        }
        if let Ok(port) = std::env::var("RELAY_PORT") {
            config.port = port
                .parse()
                .map_err(|_| ConfigError::InvalidPort(port))?;
        }
        Ok(config)
    }
}

fn parse_webhook_url(raw: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(raw.trim())
        .map_err(|e| ConfigError::InvalidWebhookUrl(format!("{raw}: {e}")))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        scheme => Err(ConfigError::InvalidWebhookUrl(format!(
            "{raw}: unsupported scheme {scheme}"
        ))),
    }
}

/// Startup configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("WEBHOOK_URL is not set")]
    MissingWebhookUrl,

    #[error("WEBHOOK_URL is not a valid URL: {0}")]
    InvalidWebhookUrl(String),

    #[error("RELAY_PORT is not a valid port: {0}")]
    InvalidPort(String),
}

/// Build the application router
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health_check))
        // Incident webhook; the path is not interpreted
        .route("/", post(relay_incident))
        .route("/*path", post(relay_incident))
        // Middleware
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Run the HTTP server
pub async fn run_server(config: ServerConfig) -> Result<(), Box<dyn std::error::Error>> {
    let state = Arc::new(AppState {
        notifier: Notifier::new(config.webhook_url.clone()),
    });

    let app = build_router(state);

    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;
    tracing::info!("Starting incident relay on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Incident relay stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
