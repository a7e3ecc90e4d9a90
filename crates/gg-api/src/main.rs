//! # graphguard-api — Binary Entry Point
//!
//! Starts the Axum HTTP server for the GraphGuard API.
//! Binds to configurable port (default 8080).

use gg_api::state::{AppConfig, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize structured tracing.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::from_env().map_err(|e| {
        tracing::error!("Configuration failed: {e}");
        e
    })?;

    let state = AppState::new(&config).map_err(|e| {
        tracing::error!(path = %config.audit.log_file.display(), "Audit log initialization failed: {e}");
        e
    })?;

    let state = match gg_api::telemetry::install_recorder() {
        Ok(handle) => state.with_prometheus(handle),
        Err(e) => {
            tracing::warn!("Prometheus recorder not installed: {e}. /metrics will return 503.");
            state
        }
    };

    let app = gg_api::app(state);

    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!(
        log_file = %config.audit.log_file.display(),
        "GraphGuard API listening on {}",
        addr
    );

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
