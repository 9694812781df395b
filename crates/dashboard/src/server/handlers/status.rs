//! Status and version endpoint handlers

use axum::{extract::State, response::Json};
use chrono::Utc;

use crate::server::state::AppState;
use crate::server::types::{response_schemas, ApiInfoResponse, ApiVersions, StatusResponse, VersionResponse};

/// GET /status - Health check endpoint
pub async fn status(State(state): State<AppState>) -> Json<StatusResponse> {
  let info = &state.info;
  Json(StatusResponse {
    status: "healthy".to_string(),
    version: env!("CARGO_PKG_VERSION").to_string(),
    mode_source: info.mode_source.as_str().to_string(),
    uploads_table: info.uploads_table.clone(),
    started_at: info.started_at,
    uptime_seconds: (Utc::now() - info.started_at).num_seconds(),
  })
}

/// GET /version - Returns current API version
pub async fn version() -> Json<VersionResponse> {
  Json(VersionResponse { version: env!("CARGO_PKG_VERSION").to_string() })
}

/// GET /api - Returns API information and supported versions
pub async fn api_info() -> Json<ApiInfoResponse> {
  let version = env!("CARGO_PKG_VERSION");
  Json(ApiInfoResponse {
    latest: version.to_string(),
    versions: ApiVersions { latest: version.to_string(), active: vec![version.to_string()] },
  })
}

/// GET /api/schema - JSON Schemas of the response bodies
pub async fn schema() -> Json<serde_json::Value> {
  Json(response_schemas())
}
