//! Axum router configuration for all endpoints

use axum::{middleware, routing::get, Router};

use crate::server::{
  handlers::{kpis, mode, status, uploads},
  middleware::request_context_middleware,
  state::AppState,
};

/// Create the main application router
pub fn create_router(state: AppState) -> Router {
  Router::new()
    // Status and version endpoints
    .route("/status", get(status::status))
    .route("/version", get(status::version))
    .route("/api", get(status::api_info))
    .route("/api/schema", get(status::schema))
    // Dashboard endpoints
    .route("/api/roi/kpis", get(kpis::get_kpis))
    .route("/api/upload/{id}/status", get(uploads::get_upload_status))
    .route("/api/emails/mode", get(mode::get_mode))
    .layer(middleware::from_fn(request_context_middleware))
    .with_state(state)
}
