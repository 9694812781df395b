//! Shared application state handed to every handler

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use std::sync::Arc;

use crate::config::{Config, ModeSourceKind};
use crate::server::models::mode::EmailMode;
use crate::server::services::{
  kpi_source::{KpiSource, SampleKpiSource},
  mode_source::{ModeSource, StaticModeSource, StoreModeSource},
  supabase::SupabaseClient,
  upload_store::UploadStore,
};

/// Facts about the running service reported by /status
#[derive(Debug, Clone)]
pub struct ServiceInfo {
  pub started_at: DateTime<Utc>,
  pub mode_source: ModeSourceKind,
  pub uploads_table: String,
}

#[derive(Clone)]
pub struct AppState {
  pub kpis: Arc<dyn KpiSource>,
  pub uploads: Arc<dyn UploadStore>,
  pub mode: Arc<dyn ModeSource>,
  /// Reported when the mode source cannot be read
  pub default_mode: EmailMode,
  pub info: ServiceInfo,
}

impl AppState {
  /// Wire the production services described by `config`
  pub fn from_config(config: &Config) -> Result<Self> {
    let client =
      Arc::new(SupabaseClient::new(config.store.clone()).context("Failed to build Supabase HTTP client")?);

    let mode: Arc<dyn ModeSource> = match config.mode_source {
      ModeSourceKind::Memory => Arc::new(StaticModeSource::new(config.default_mode)),
      ModeSourceKind::Store => {
        Arc::new(StoreModeSource::new(client.clone(), config.deployment.clone(), config.default_mode))
      }
    };

    let info = ServiceInfo {
      started_at: Utc::now(),
      mode_source: config.mode_source,
      uploads_table: config.store.uploads_table.clone(),
    };

    Ok(Self { kpis: Arc::new(SampleKpiSource), uploads: client, mode, default_mode: config.default_mode, info })
  }

  /// Assemble state from explicit services (used by tests and embedders)
  pub fn new(
    kpis: Arc<dyn KpiSource>,
    uploads: Arc<dyn UploadStore>,
    mode: Arc<dyn ModeSource>,
    default_mode: EmailMode,
  ) -> Self {
    let info = ServiceInfo {
      started_at: Utc::now(),
      mode_source: ModeSourceKind::Memory,
      uploads_table: crate::config::DEFAULT_UPLOADS_TABLE.to_string(),
    };
    Self { kpis, uploads, mode, default_mode, info }
  }
}
