//! Email processing mode (demo vs live)

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Whether the email subsystem works on sample data or on real webhook traffic
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum EmailMode {
  #[default]
  Demo,
  Live,
}

impl EmailMode {
  pub fn from_demo_flag(demo: bool) -> Self {
    if demo {
      EmailMode::Demo
    } else {
      EmailMode::Live
    }
  }

  pub fn is_demo(self) -> bool {
    self == EmailMode::Demo
  }

  pub fn as_str(self) -> &'static str {
    match self {
      EmailMode::Demo => "demo",
      EmailMode::Live => "live",
    }
  }

  /// Human readable explanation shown next to the mode toggle
  pub fn description(self) -> &'static str {
    match self {
      EmailMode::Demo => "Using sample email data for demonstration",
      EmailMode::Live => "Processing real emails received via webhook",
    }
  }
}

impl fmt::Display for EmailMode {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}
