//! ROI KPI snapshot shown on the dashboard landing page

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Direction of a metric compared to the previous period
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
  Up,
  Down,
  Neutral,
}

impl Trend {
  /// Derive the trend from the current and previous values
  pub fn between(current: f64, previous: f64) -> Self {
    if current > previous {
      Trend::Up
    } else if current < previous {
      Trend::Down
    } else {
      Trend::Neutral
    }
  }
}

/// A single metric group with its period-over-period comparison
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct MetricGroup {
  /// Value for the current period
  pub current: f64,

  /// Value for the previous period
  pub previous: f64,

  /// Display unit (hours, tasks, usd, properties)
  pub unit: String,

  /// Direction of change
  pub trend: Trend,
}

impl MetricGroup {
  pub fn new(current: f64, previous: f64, unit: &str) -> Self {
    Self { current, previous, unit: unit.to_string(), trend: Trend::between(current, previous) }
  }
}

/// The four metric groups rendered by the ROI dashboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct KpiSnapshot {
  pub time_saved: MetricGroup,
  pub tasks_completed: MetricGroup,
  pub value_identified: MetricGroup,
  pub active_properties: MetricGroup,
}

impl KpiSnapshot {
  /// Placeholder figures until a real aggregation source exists
  pub fn sample() -> Self {
    Self {
      time_saved: MetricGroup::new(127.5, 98.0, "hours"),
      tasks_completed: MetricGroup::new(342.0, 289.0, "tasks"),
      value_identified: MetricGroup::new(45_250.0, 38_900.0, "usd"),
      active_properties: MetricGroup::new(12.0, 12.0, "properties"),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_trend_between() {
    assert_eq!(Trend::between(2.0, 1.0), Trend::Up);
    assert_eq!(Trend::between(1.0, 2.0), Trend::Down);
    assert_eq!(Trend::between(5.0, 5.0), Trend::Neutral);
  }

  #[test]
  fn test_sample_snapshot_trends_follow_values() {
    let snapshot = KpiSnapshot::sample();
    for group in
      [&snapshot.time_saved, &snapshot.tasks_completed, &snapshot.value_identified, &snapshot.active_properties]
    {
      assert_eq!(group.trend, Trend::between(group.current, group.previous));
    }
    assert_eq!(snapshot.active_properties.trend, Trend::Neutral);
  }

  #[test]
  fn test_snapshot_serializes_camel_case_groups() {
    let value = serde_json::to_value(KpiSnapshot::sample()).unwrap();
    let object = value.as_object().unwrap();

    let mut keys: Vec<&str> = object.keys().map(String::as_str).collect();
    keys.sort_unstable();
    assert_eq!(keys, vec!["activeProperties", "tasksCompleted", "timeSaved", "valueIdentified"]);
    assert_eq!(value["timeSaved"]["trend"], "up");
    assert_eq!(value["valueIdentified"]["unit"], "usd");
  }
}
