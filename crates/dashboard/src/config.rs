//! Runtime configuration for the dashboard server
//!
//! Values come from CLI flags or environment variables (see the
//! `dashboard_server` binary) and are validated here before any service is
//! constructed, so a missing or malformed store endpoint fails at startup.

use clap::Parser;
use std::{net::SocketAddr, time::Duration};
use thiserror::Error;
use url::Url;

use crate::server::models::mode::EmailMode;

pub const DEFAULT_UPLOADS_TABLE: &str = "uploads";
pub const DEFAULT_SETTINGS_TABLE: &str = "app_settings";
pub const DEFAULT_DEPLOYMENT: &str = "default";
pub const DEFAULT_STORE_TIMEOUT_SECS: u64 = 10;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
  #[error("Invalid Supabase URL '{url}': {message}")]
  InvalidStoreUrl { url: String, message: String },

  #[error("Supabase service role key must not be empty")]
  MissingStoreKey,

  #[error("'{name}' is not a valid table name")]
  InvalidTableName { name: String },

  #[error("Deployment key must not be empty")]
  MissingDeployment,
}

/// Where the email mode is read from on each request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ModeSourceKind {
  /// Fixed for the lifetime of the process
  #[default]
  Memory,
  /// Shared settings row in the hosted store, keyed by deployment
  Store,
}

impl ModeSourceKind {
  pub fn as_str(self) -> &'static str {
    match self {
      ModeSourceKind::Memory => "memory",
      ModeSourceKind::Store => "store",
    }
  }
}

/// Connection settings for the Supabase REST endpoint
#[derive(Debug, Clone)]
pub struct StoreConfig {
  pub base_url: Url,
  pub service_key: String,
  pub uploads_table: String,
  pub settings_table: String,
  pub timeout: Duration,
}

impl StoreConfig {
  pub fn new(url: &str, service_key: &str) -> Result<Self, ConfigError> {
    let base_url = parse_base_url(url)?;

    if service_key.trim().is_empty() {
      return Err(ConfigError::MissingStoreKey);
    }

    Ok(Self {
      base_url,
      service_key: service_key.trim().to_string(),
      uploads_table: DEFAULT_UPLOADS_TABLE.to_string(),
      settings_table: DEFAULT_SETTINGS_TABLE.to_string(),
      timeout: Duration::from_secs(DEFAULT_STORE_TIMEOUT_SECS),
    })
  }

  pub fn with_uploads_table(mut self, name: &str) -> Result<Self, ConfigError> {
    self.uploads_table = validate_table_name(name)?;
    Ok(self)
  }

  pub fn with_settings_table(mut self, name: &str) -> Result<Self, ConfigError> {
    self.settings_table = validate_table_name(name)?;
    Ok(self)
  }

  pub fn with_timeout(mut self, timeout: Duration) -> Self {
    self.timeout = timeout;
    self
  }

  /// PostgREST endpoint for a table, e.g. `https://x.supabase.co/rest/v1/uploads`
  pub fn table_url(&self, table: &str) -> Result<Url, url::ParseError> {
    self.base_url.join(&format!("rest/v1/{table}"))
  }
}

/// Full server configuration
#[derive(Debug, Clone)]
pub struct Config {
  pub bind: SocketAddr,
  pub store: StoreConfig,
  pub default_mode: EmailMode,
  pub mode_source: ModeSourceKind,
  pub deployment: String,
}

impl Config {
  pub fn new(bind: SocketAddr, store: StoreConfig) -> Self {
    Self {
      bind,
      store,
      default_mode: EmailMode::default(),
      mode_source: ModeSourceKind::default(),
      deployment: DEFAULT_DEPLOYMENT.to_string(),
    }
  }

  pub fn with_mode(mut self, mode: EmailMode, source: ModeSourceKind) -> Self {
    self.default_mode = mode;
    self.mode_source = source;
    self
  }

  pub fn with_deployment(mut self, deployment: &str) -> Result<Self, ConfigError> {
    let deployment = deployment.trim();
    if deployment.is_empty() {
      return Err(ConfigError::MissingDeployment);
    }
    self.deployment = deployment.to_string();
    Ok(self)
  }
}

/// Command line and environment settings for `dashboard_server`
#[derive(Parser, Debug)]
#[command(name = "dashboard_server")]
#[command(about = "ROI Dashboard REST API Server")]
#[command(version)]
pub struct ServerArgs {
  /// Server bind address
  #[arg(long, env = "DASHBOARD_BIND", default_value = "127.0.0.1:3000")]
  pub bind: SocketAddr,

  /// Supabase project URL
  #[arg(long, env = "SUPABASE_URL")]
  pub supabase_url: String,

  /// Supabase service role key
  #[arg(long, env = "SUPABASE_SERVICE_ROLE_KEY", hide_env_values = true)]
  pub supabase_key: String,

  /// Table holding upload records
  #[arg(long, env = "DASHBOARD_UPLOADS_TABLE", default_value = DEFAULT_UPLOADS_TABLE)]
  pub uploads_table: String,

  /// Table holding per-deployment settings (used with --mode-source store)
  #[arg(long, env = "DASHBOARD_SETTINGS_TABLE", default_value = DEFAULT_SETTINGS_TABLE)]
  pub settings_table: String,

  /// Email mode reported when no other source is available
  #[arg(long, env = "DASHBOARD_EMAIL_MODE", value_enum, default_value_t = EmailMode::Demo)]
  pub mode: EmailMode,

  /// Where the email mode is read from
  #[arg(long, env = "DASHBOARD_MODE_SOURCE", value_enum, default_value_t = ModeSourceKind::Memory)]
  pub mode_source: ModeSourceKind,

  /// Deployment key for the settings row
  #[arg(long, env = "DASHBOARD_DEPLOYMENT", default_value = DEFAULT_DEPLOYMENT)]
  pub deployment: String,

  /// Timeout for store requests, in seconds
  #[arg(long, env = "DASHBOARD_STORE_TIMEOUT_SECS", default_value_t = DEFAULT_STORE_TIMEOUT_SECS)]
  pub store_timeout_secs: u64,

  /// Enable verbose logging
  #[arg(short, long)]
  pub verbose: bool,
}

impl ServerArgs {
  pub fn into_config(self) -> Result<Config, ConfigError> {
    let store = StoreConfig::new(&self.supabase_url, &self.supabase_key)?
      .with_uploads_table(&self.uploads_table)?
      .with_settings_table(&self.settings_table)?
      .with_timeout(Duration::from_secs(self.store_timeout_secs));

    Config::new(self.bind, store).with_mode(self.mode, self.mode_source).with_deployment(&self.deployment)
  }
}

fn parse_base_url(raw: &str) -> Result<Url, ConfigError> {
  let invalid = |message: &str| ConfigError::InvalidStoreUrl { url: raw.to_string(), message: message.to_string() };

  let mut url = Url::parse(raw.trim()).map_err(|e| invalid(&e.to_string()))?;
  if !matches!(url.scheme(), "http" | "https") {
    return Err(invalid("scheme must be http or https"));
  }

  // Url::join replaces the last path segment unless the base ends with '/'
  if !url.path().ends_with('/') {
    let path = format!("{}/", url.path());
    url.set_path(&path);
  }

  Ok(url)
}

fn validate_table_name(name: &str) -> Result<String, ConfigError> {
  let valid = !name.is_empty() && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_');
  if valid {
    Ok(name.to_string())
  } else {
    Err(ConfigError::InvalidTableName { name: name.to_string() })
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_table_url_for_bare_host() {
    let store = StoreConfig::new("https://project.supabase.co", "service-key").unwrap();
    let url = store.table_url(&store.uploads_table).unwrap();
    assert_eq!(url.as_str(), "https://project.supabase.co/rest/v1/uploads");
  }

  #[test]
  fn test_table_url_keeps_base_path() {
    let store = StoreConfig::new("http://localhost:54321/proxy", "key").unwrap();
    let url = store.table_url("app_settings").unwrap();
    assert_eq!(url.as_str(), "http://localhost:54321/proxy/rest/v1/app_settings");
  }

  #[test]
  fn test_rejects_bad_store_settings() {
    assert!(matches!(StoreConfig::new("not a url", "key"), Err(ConfigError::InvalidStoreUrl { .. })));
    assert!(matches!(
      StoreConfig::new("ftp://project.supabase.co", "key"),
      Err(ConfigError::InvalidStoreUrl { .. })
    ));
    assert_eq!(StoreConfig::new("https://project.supabase.co", "  ").unwrap_err(), ConfigError::MissingStoreKey);
  }

  #[test]
  fn test_table_name_validation() {
    let store = StoreConfig::new("https://project.supabase.co", "key").unwrap();
    assert!(store.clone().with_uploads_table("document_uploads").is_ok());
    assert_eq!(
      store.with_uploads_table("uploads?select=*").unwrap_err(),
      ConfigError::InvalidTableName { name: "uploads?select=*".to_string() }
    );
  }

  #[test]
  fn test_config_defaults() {
    let store = StoreConfig::new("https://project.supabase.co", "key").unwrap();
    let config = Config::new("127.0.0.1:3000".parse().unwrap(), store);

    assert_eq!(config.default_mode, EmailMode::Demo);
    assert_eq!(config.mode_source, ModeSourceKind::Memory);
    assert_eq!(config.deployment, DEFAULT_DEPLOYMENT);
    assert_eq!(config.store.timeout, Duration::from_secs(DEFAULT_STORE_TIMEOUT_SECS));
    assert!(config.with_deployment(" ").is_err());
  }
}
