//! REST server startup and configuration

use anyhow::{Context, Result};
use axum::{serve, Router};
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::config::Config;
use crate::server::{routing::create_router, state::AppState};

/// Router with the HTTP tracing and CORS layers applied
pub fn build_app(state: AppState) -> Router {
  create_router(state)
    .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()).layer(CorsLayer::permissive()))
}

/// Start the REST server and run until Ctrl-C
pub async fn start_server(config: Config) -> Result<()> {
  let state = AppState::from_config(&config)?;

  tracing::info!(
    uploads_table = %config.store.uploads_table,
    mode_source = config.mode_source.as_str(),
    default_mode = %config.default_mode,
    deployment = %config.deployment,
    "Starting dashboard REST server on {}",
    config.bind
  );

  let app = build_app(state);

  let listener =
    TcpListener::bind(config.bind).await.with_context(|| format!("Failed to bind {}", config.bind))?;
  tracing::info!("Server listening on {}", config.bind);

  serve(listener, app).with_graceful_shutdown(shutdown_signal()).await.context("Server error")?;

  tracing::info!("Server shutdown gracefully");
  Ok(())
}

async fn shutdown_signal() {
  if let Err(e) = tokio::signal::ctrl_c().await {
    tracing::error!("Failed to listen for shutdown signal: {e}");
    std::future::pending::<()>().await;
  }
}
