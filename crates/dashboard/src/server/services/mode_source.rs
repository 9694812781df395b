//! Where the email demo/live mode comes from
//!
//! A process-local value is fine for a single instance. When several
//! instances serve the same deployment, the store-backed source keeps them
//! consistent by reading one settings row per request.

use async_trait::async_trait;
use serde::Deserialize;
use std::sync::Arc;

use crate::error::StoreError;
use crate::server::models::mode::EmailMode;
use crate::server::services::supabase::SupabaseClient;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ModeSource: Send + Sync {
  async fn current_mode(&self) -> Result<EmailMode, StoreError>;
}

/// Mode fixed at startup from configuration
#[derive(Debug, Clone, Copy)]
pub struct StaticModeSource {
  mode: EmailMode,
}

impl StaticModeSource {
  pub fn new(mode: EmailMode) -> Self {
    Self { mode }
  }
}

#[async_trait]
impl ModeSource for StaticModeSource {
  async fn current_mode(&self) -> Result<EmailMode, StoreError> {
    Ok(self.mode)
  }
}

#[derive(Debug, Deserialize)]
struct ModeSettingRow {
  demo_mode: bool,
}

/// Reads `demo_mode` from the settings row matching this deployment
pub struct StoreModeSource {
  client: Arc<SupabaseClient>,
  deployment: String,
  fallback: EmailMode,
}

impl StoreModeSource {
  pub fn new(client: Arc<SupabaseClient>, deployment: impl Into<String>, fallback: EmailMode) -> Self {
    Self { client, deployment: deployment.into(), fallback }
  }
}

#[async_trait]
impl ModeSource for StoreModeSource {
  async fn current_mode(&self) -> Result<EmailMode, StoreError> {
    let table = &self.client.config().settings_table;
    let row: Option<ModeSettingRow> = self.client.select_first(table, "deployment", &self.deployment).await?;

    match row {
      Some(row) => Ok(EmailMode::from_demo_flag(row.demo_mode)),
      None => {
        tracing::debug!(deployment = %self.deployment, "no mode setting stored, using fallback");
        Ok(self.fallback)
      }
    }
  }
}
