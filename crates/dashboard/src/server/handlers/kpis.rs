//! ROI KPI endpoint handler

use axum::{
  extract::{Extension, State},
  response::Json,
};

use crate::error::ApiError;
use crate::server::{middleware::RequestContext, models::kpi::KpiSnapshot, state::AppState};

pub const KPI_FETCH_FAILED: &str = "Failed to fetch KPI data";

/// GET /api/roi/kpis - Current ROI KPI snapshot
pub async fn get_kpis(
  State(state): State<AppState>,
  Extension(context): Extension<RequestContext>,
) -> Result<Json<KpiSnapshot>, ApiError> {
  match state.kpis.snapshot().await {
    Ok(snapshot) => Ok(Json(snapshot)),
    Err(e) => {
      context.log_error(&format!("Failed to build KPI snapshot: {e:#}"), "kpi-api");
      Err(ApiError::internal(KPI_FETCH_FAILED, e))
    }
  }
}
