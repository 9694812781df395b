//! Source of the ROI KPI snapshot

use anyhow::Result;
use async_trait::async_trait;

use crate::server::models::kpi::KpiSnapshot;

/// Anything able to produce the current KPI snapshot
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait KpiSource: Send + Sync {
  async fn snapshot(&self) -> Result<KpiSnapshot>;
}

/// Serves the fixed sample snapshot; no aggregation backend is wired yet
#[derive(Debug, Default, Clone, Copy)]
pub struct SampleKpiSource;

#[async_trait]
impl KpiSource for SampleKpiSource {
  async fn snapshot(&self) -> Result<KpiSnapshot> {
    Ok(KpiSnapshot::sample())
  }
}
