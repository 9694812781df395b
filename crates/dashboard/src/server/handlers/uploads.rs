//! Upload status endpoint handler

use axum::{
  extract::{Extension, Path, State},
  response::Json,
};

use crate::error::{ApiError, StoreError};
use crate::server::{middleware::RequestContext, state::AppState, types::UploadStatusResponse};

pub const UPLOAD_NOT_FOUND: &str = "Upload not found";
pub const INTERNAL_SERVER_ERROR: &str = "Internal server error";

const COMPONENT: &str = "uploads-api";

/// GET /api/upload/{id}/status - Processing progress for one upload
pub async fn get_upload_status(
  State(state): State<AppState>,
  Extension(context): Extension<RequestContext>,
  Path(upload_id): Path<String>,
) -> Result<Json<UploadStatusResponse>, ApiError> {
  match state.uploads.find_upload(&upload_id).await {
    Ok(Some(record)) => {
      let response = UploadStatusResponse::from(record);
      context.log_info(
        &format!(
          "Upload {} is {} ({}%)",
          response.upload_id,
          response.status.as_deref().unwrap_or("without status"),
          response.progress
        ),
        COMPONENT,
      );
      Ok(Json(response))
    }
    Ok(None) => {
      context.log_info(&format!("Upload {upload_id} not found"), COMPONENT);
      Err(ApiError::not_found(UPLOAD_NOT_FOUND))
    }
    // The store answered but refused the lookup; report it like a missing row
    Err(e @ StoreError::Rejected { .. }) => {
      context.log_warn(&format!("Lookup of upload {upload_id} rejected: {e}"), COMPONENT);
      Err(ApiError::not_found(UPLOAD_NOT_FOUND))
    }
    Err(e) => {
      context.log_error(&format!("Lookup of upload {upload_id} failed: {e}"), COMPONENT);
      Err(ApiError::internal(INTERNAL_SERVER_ERROR, e))
    }
  }
}
