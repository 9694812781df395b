//! Minimal Supabase (PostgREST) client
//!
//! Covers equality lookups returning at most one row against
//! `/rest/v1/{table}`, authenticated with the service role key.

use async_trait::async_trait;
use reqwest::header::ACCEPT;
use serde::de::DeserializeOwned;

use crate::config::StoreConfig;
use crate::error::StoreError;
use crate::server::models::upload::UploadRecord;
use crate::server::services::upload_store::UploadStore;

pub struct SupabaseClient {
  http: reqwest::Client,
  config: StoreConfig,
}

impl SupabaseClient {
  pub fn new(config: StoreConfig) -> Result<Self, StoreError> {
    let http = reqwest::Client::builder().timeout(config.timeout).build()?;
    Ok(Self { http, config })
  }

  pub fn config(&self) -> &StoreConfig {
    &self.config
  }

  /// `GET /rest/v1/{table}?select=*&{column}=eq.{value}&limit=1`
  pub async fn select_first<T: DeserializeOwned>(
    &self,
    table: &str,
    column: &str,
    value: &str,
  ) -> Result<Option<T>, StoreError> {
    let url = self.config.table_url(table)?;
    let filter = format!("eq.{value}");

    tracing::debug!(table, column, "querying store");

    let response = self
      .http
      .get(url)
      .query(&[("select", "*"), (column, filter.as_str()), ("limit", "1")])
      .header("apikey", &self.config.service_key)
      .bearer_auth(&self.config.service_key)
      .header(ACCEPT, "application/json")
      .send()
      .await?;

    let status = response.status();
    let body = response.text().await?;

    if !status.is_success() {
      return Err(StoreError::rejected(status.as_u16(), body));
    }

    let mut rows: Vec<T> = serde_json::from_str(&body)?;
    if rows.is_empty() {
      Ok(None)
    } else {
      Ok(Some(rows.swap_remove(0)))
    }
  }
}

#[async_trait]
impl UploadStore for SupabaseClient {
  async fn find_upload(&self, id: &str) -> Result<Option<UploadRecord>, StoreError> {
    self.select_first(&self.config.uploads_table, "id", id).await
  }
}
