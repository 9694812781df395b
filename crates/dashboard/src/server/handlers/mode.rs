//! Email mode endpoint handler

use axum::{
  extract::{Extension, State},
  response::Json,
};

use crate::server::{middleware::RequestContext, state::AppState, types::ModeResponse};

/// GET /api/emails/mode - Whether email processing runs on demo or live data
///
/// Never fails: if the mode source cannot be read the configured default is
/// reported instead.
pub async fn get_mode(
  State(state): State<AppState>,
  Extension(context): Extension<RequestContext>,
) -> Json<ModeResponse> {
  let mode = match state.mode.current_mode().await {
    Ok(mode) => mode,
    Err(e) => {
      context.log_warn(
        &format!("Failed to read email mode, reporting default '{}': {e}", state.default_mode),
        "mode-api",
      );
      state.default_mode
    }
  };

  Json(ModeResponse::from(mode))
}
