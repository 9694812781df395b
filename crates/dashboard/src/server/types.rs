//! REST API types with schemars annotations for schema generation

use chrono::{DateTime, Utc};
use schemars::{schema_for, JsonSchema};
use serde::{Deserialize, Serialize};

use crate::server::models::{
  kpi::KpiSnapshot,
  mode::EmailMode,
  upload::{Stage, UploadRecord},
};

// Error Envelope
// ==============

/// Body returned with every 4xx/5xx response
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct ErrorResponse {
  /// Human readable error message
  pub error: String,
}

// Upload Status Endpoint
// ======================

/// Response for /api/upload/{id}/status
#[derive(Debug, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UploadStatusResponse {
  /// Upload identifier as stored
  pub upload_id: String,

  /// Original file name supplied by the user
  pub file_name: String,

  /// Raw status code from the ingestion pipeline, null when the row has none
  pub status: Option<String>,

  /// Percentage complete, 0 to 100
  pub progress: u8,

  /// User-facing processing phase
  pub stage: Stage,

  /// Error message recorded by the pipeline, if any
  #[serde(skip_serializing_if = "Option::is_none", default)]
  pub error: Option<String>,
}

impl From<UploadRecord> for UploadStatusResponse {
  fn from(record: UploadRecord) -> Self {
    let progress = record.progress();
    Self {
      upload_id: record.id,
      file_name: record.original_filename,
      status: record.status,
      progress: progress.progress,
      stage: progress.stage,
      error: record.error_message,
    }
  }
}

// Mode Endpoint
// =============

/// Response for /api/emails/mode
#[derive(Debug, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct ModeResponse {
  /// Current email processing mode
  pub mode: EmailMode,

  /// Explanation of what the mode means for incoming email data
  pub description: String,
}

impl From<EmailMode> for ModeResponse {
  fn from(mode: EmailMode) -> Self {
    Self { mode, description: mode.description().to_string() }
  }
}

// Status/Version Endpoints
// ========================

/// Response for /status endpoint
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct StatusResponse {
  /// Health status
  pub status: String,

  /// Server version
  pub version: String,

  /// Where the email mode is read from (memory or store)
  pub mode_source: String,

  /// Table upload records are read from
  pub uploads_table: String,

  /// When this process started serving
  pub started_at: DateTime<Utc>,

  /// Seconds since startup
  pub uptime_seconds: i64,
}

/// Response for /version endpoint
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct VersionResponse {
  /// Current API version
  pub version: String,
}

/// Response for /api endpoint
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct ApiInfoResponse {
  /// Latest API version
  pub latest: String,

  /// Version information
  pub versions: ApiVersions,
}

/// API version details
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct ApiVersions {
  /// Latest version
  pub latest: String,

  /// Currently active versions
  pub active: Vec<String>,
}

/// JSON Schemas for every response body, keyed by type name
pub fn response_schemas() -> serde_json::Value {
  serde_json::json!({
    "KpiSnapshot": schema_for!(KpiSnapshot),
    "UploadStatusResponse": schema_for!(UploadStatusResponse),
    "ModeResponse": schema_for!(ModeResponse),
    "ErrorResponse": schema_for!(ErrorResponse),
    "StatusResponse": schema_for!(StatusResponse),
    "VersionResponse": schema_for!(VersionResponse),
    "ApiInfoResponse": schema_for!(ApiInfoResponse),
  })
}
