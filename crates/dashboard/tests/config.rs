#[cfg(test)]
mod config_tests {
  use clap::Parser;
  use serial_test::serial;
  use std::env;
  use std::time::Duration;

  use dashboard::config::{ConfigError, ModeSourceKind, ServerArgs};
  use dashboard::server::models::mode::EmailMode;

  const VARS: [&str; 9] = [
    "DASHBOARD_BIND",
    "SUPABASE_URL",
    "SUPABASE_SERVICE_ROLE_KEY",
    "DASHBOARD_UPLOADS_TABLE",
    "DASHBOARD_SETTINGS_TABLE",
    "DASHBOARD_EMAIL_MODE",
    "DASHBOARD_MODE_SOURCE",
    "DASHBOARD_DEPLOYMENT",
    "DASHBOARD_STORE_TIMEOUT_SECS",
  ];

  fn clear_env() {
    for var in VARS {
      env::remove_var(var);
    }
  }

  #[test]
  #[serial]
  fn test_store_settings_are_required() {
    clear_env();

    let result = ServerArgs::try_parse_from(["dashboard_server"]);
    assert!(result.is_err());
  }

  #[test]
  #[serial]
  fn test_config_from_environment() {
    clear_env();
    env::set_var("SUPABASE_URL", "https://project.supabase.co");
    env::set_var("SUPABASE_SERVICE_ROLE_KEY", "service-key");
    env::set_var("DASHBOARD_EMAIL_MODE", "live");
    env::set_var("DASHBOARD_MODE_SOURCE", "store");
    env::set_var("DASHBOARD_DEPLOYMENT", "production");

    let config = ServerArgs::try_parse_from(["dashboard_server"]).unwrap().into_config().unwrap();
    clear_env();

    assert_eq!(config.bind.to_string(), "127.0.0.1:3000");
    assert_eq!(config.store.base_url.as_str(), "https://project.supabase.co/");
    assert_eq!(config.store.service_key, "service-key");
    assert_eq!(config.store.uploads_table, "uploads");
    assert_eq!(config.store.settings_table, "app_settings");
    assert_eq!(config.store.timeout, Duration::from_secs(10));
    assert_eq!(config.default_mode, EmailMode::Live);
    assert_eq!(config.mode_source, ModeSourceKind::Store);
    assert_eq!(config.deployment, "production");
  }

  #[test]
  #[serial]
  fn test_flags_override_environment() {
    clear_env();
    env::set_var("SUPABASE_URL", "https://ignored.supabase.co");
    env::set_var("SUPABASE_SERVICE_ROLE_KEY", "service-key");

    let args = ServerArgs::try_parse_from([
      "dashboard_server",
      "--supabase-url",
      "http://localhost:54321",
      "--bind",
      "0.0.0.0:8080",
      "--uploads-table",
      "document_uploads",
      "--store-timeout-secs",
      "3",
    ])
    .unwrap();
    clear_env();

    let config = args.into_config().unwrap();
    assert_eq!(config.bind.port(), 8080);
    assert_eq!(config.store.base_url.as_str(), "http://localhost:54321/");
    assert_eq!(config.store.uploads_table, "document_uploads");
    assert_eq!(config.store.timeout, Duration::from_secs(3));
    assert_eq!(config.default_mode, EmailMode::Demo);
    assert_eq!(config.mode_source, ModeSourceKind::Memory);
  }

  #[test]
  #[serial]
  fn test_invalid_store_url_fails_startup() {
    clear_env();

    let args = ServerArgs::try_parse_from([
      "dashboard_server",
      "--supabase-url",
      "project.supabase.co",
      "--supabase-key",
      "service-key",
    ])
    .unwrap();

    assert!(matches!(args.into_config(), Err(ConfigError::InvalidStoreUrl { .. })));
  }
}
