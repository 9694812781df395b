//! Dashboard REST Server
//!
//! HTTP REST API server backing the ROI dashboard.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{filter::EnvFilter, fmt, prelude::*};

use dashboard::config::ServerArgs;
use dashboard::server::startup::start_server;

#[tokio::main]
async fn main() -> Result<()> {
  let args = ServerArgs::parse();

  // RUST_LOG wins; otherwise keep hyper and friends quiet unless verbose
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
    if args.verbose {
      EnvFilter::new("dashboard=debug,tower_http=debug,info")
    } else {
      EnvFilter::new("dashboard=info,tower_http=warn,warn")
    }
  });

  tracing_subscriber::registry().with(fmt::layer()).with(filter).init();

  tracing::info!("Starting Dashboard REST Server v{}", env!("CARGO_PKG_VERSION"));

  let config = args.into_config()?;
  start_server(config).await?;

  Ok(())
}
