//! Upload records and the status to progress mapping
//!
//! Upload rows are written by the ingestion pipeline; this service only reads
//! the latest snapshot and translates the internal status code into the
//! coarse progress/stage pair the dashboard renders.

use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};

/// Row of the uploads table as returned by the store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UploadRecord {
  /// Text or integer primary key, always carried as text
  #[serde(deserialize_with = "id_as_string")]
  pub id: String,

  pub original_filename: String,

  /// Raw status code, kept verbatim so unknown codes are echoed back.
  /// A null or absent column maps to the unknown-status default.
  #[serde(default)]
  pub status: Option<String>,

  #[serde(default)]
  pub error_message: Option<String>,
}

impl UploadRecord {
  pub fn progress(&self) -> StageProgress {
    match self.status.as_deref() {
      Some(code) => StageProgress::for_code(code),
      None => StageProgress::UNKNOWN,
    }
  }
}

fn id_as_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
  D: Deserializer<'de>,
{
  match serde_json::Value::deserialize(deserializer)? {
    serde_json::Value::String(id) => Ok(id),
    serde_json::Value::Number(id) => Ok(id.to_string()),
    other => Err(serde::de::Error::custom(format!("expected string or integer id, got {other}"))),
  }
}

/// Known status codes written by the ingestion pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadStatus {
  Uploaded,
  Processing,
  GeneratingTasks,
  Completed,
  Failed,
}

impl UploadStatus {
  pub const ALL: [UploadStatus; 5] = [
    UploadStatus::Uploaded,
    UploadStatus::Processing,
    UploadStatus::GeneratingTasks,
    UploadStatus::Completed,
    UploadStatus::Failed,
  ];

  pub fn from_code(code: &str) -> Option<Self> {
    match code {
      "uploaded" => Some(UploadStatus::Uploaded),
      "processing" => Some(UploadStatus::Processing),
      "generating_tasks" => Some(UploadStatus::GeneratingTasks),
      "completed" => Some(UploadStatus::Completed),
      "failed" => Some(UploadStatus::Failed),
      _ => None,
    }
  }

  pub fn code(self) -> &'static str {
    match self {
      UploadStatus::Uploaded => "uploaded",
      UploadStatus::Processing => "processing",
      UploadStatus::GeneratingTasks => "generating_tasks",
      UploadStatus::Completed => "completed",
      UploadStatus::Failed => "failed",
    }
  }

  pub fn progress(self) -> StageProgress {
    let (progress, stage) = match self {
      UploadStatus::Uploaded => (30, Stage::Uploading),
      UploadStatus::Processing => (60, Stage::Analyzing),
      UploadStatus::GeneratingTasks => (85, Stage::Generating),
      UploadStatus::Completed => (100, Stage::Complete),
      UploadStatus::Failed => (0, Stage::Error),
    };
    StageProgress { progress, stage }
  }
}

/// User-facing processing phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Stage {
  Uploading,
  Analyzing,
  Generating,
  Complete,
  Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StageProgress {
  /// Percentage, 0 to 100
  pub progress: u8,
  pub stage: Stage,
}

impl StageProgress {
  /// Unrecognized codes report no progress in the uploading stage
  pub const UNKNOWN: StageProgress = StageProgress { progress: 0, stage: Stage::Uploading };

  pub fn for_code(code: &str) -> Self {
    UploadStatus::from_code(code).map(UploadStatus::progress).unwrap_or(Self::UNKNOWN)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_known_status_table() {
    let expected = [
      ("uploaded", 30, Stage::Uploading),
      ("processing", 60, Stage::Analyzing),
      ("generating_tasks", 85, Stage::Generating),
      ("completed", 100, Stage::Complete),
      ("failed", 0, Stage::Error),
    ];

    for (code, progress, stage) in expected {
      assert_eq!(StageProgress::for_code(code), StageProgress { progress, stage }, "status {code}");
    }
  }

  #[test]
  fn test_unknown_status_defaults_to_uploading() {
    for code in ["", "queued", "COMPLETED", "generating-tasks"] {
      assert_eq!(StageProgress::for_code(code), StageProgress::UNKNOWN, "status {code:?}");
    }
  }

  #[test]
  fn test_status_codes_round_trip() {
    for status in UploadStatus::ALL {
      assert_eq!(UploadStatus::from_code(status.code()), Some(status));
    }
  }

  #[test]
  fn test_record_ignores_extra_columns() {
    let record: UploadRecord = serde_json::from_value(serde_json::json!({
      "id": "abc123",
      "original_filename": "plan.pdf",
      "status": "processing",
      "created_at": "2024-05-01T10:00:00Z",
      "user_id": "u-1"
    }))
    .unwrap();

    assert_eq!(record.error_message, None);
    assert_eq!(record.progress().stage, Stage::Analyzing);
  }

  #[test]
  fn test_null_or_missing_status_uses_default_stage() {
    for row in [
      serde_json::json!({ "id": "abc123", "original_filename": "plan.pdf", "status": null }),
      serde_json::json!({ "id": "abc123", "original_filename": "plan.pdf" }),
    ] {
      let record: UploadRecord = serde_json::from_value(row).unwrap();
      assert_eq!(record.status, None);
      assert_eq!(record.progress(), StageProgress::UNKNOWN);
    }
  }

  #[test]
  fn test_integer_id_is_read_as_text() {
    let record: UploadRecord = serde_json::from_value(serde_json::json!({
      "id": 42,
      "original_filename": "budget.xlsx",
      "status": "uploaded"
    }))
    .unwrap();

    assert_eq!(record.id, "42");

    let bad = serde_json::from_value::<UploadRecord>(serde_json::json!({
      "id": null,
      "original_filename": "budget.xlsx",
      "status": "uploaded"
    }));
    assert!(bad.is_err());
  }
}
