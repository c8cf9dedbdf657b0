//! Trend prediction — placeholder only.
//!
//! Real forecasting (regression over the record window, per-metric slopes) is
//! not implemented. The host expects a `TrendSummary` today, so this module
//! returns a fixed answer for any input. Do not read meaning into it.

use crate::types::{DailyMetricRecord, Trend, TrendSummary};

/// Confidence reported by the placeholder. Fixed, not computed.
pub const PLACEHOLDER_CONFIDENCE: f64 = 0.8;

/// Hardcoded stand-in for trend prediction.
///
/// Returns `{ trend: "stable", confidence: 0.8 }` regardless of input,
/// including an empty window. Kept as a visible stub so the host contract
/// stays stable until forecasting lands.
pub fn placeholder_trend(_records: &[DailyMetricRecord]) -> TrendSummary {
  TrendSummary {
    trend: Trend::Stable,
    confidence: PLACEHOLDER_CONFIDENCE,
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use chrono::NaiveDate;

  #[test]
  fn empty_input_gets_placeholder() {
    let summary = placeholder_trend(&[]);
    assert_eq!(summary.trend, Trend::Stable);
    assert_eq!(summary.confidence, 0.8);
  }

  #[test]
  fn any_input_gets_same_placeholder() {
    let records: Vec<DailyMetricRecord> = (1..=10)
      .map(|i| DailyMetricRecord {
        date: NaiveDate::from_ymd_opt(2025, 3, i).unwrap(),
        sleep: i as f64,
        training: (10 - i) as f64,
        nutrition: 5.0,
        learning: 0.0,
        screen: 2.0 * i as f64,
      })
      .collect();
    assert_eq!(placeholder_trend(&records), placeholder_trend(&[]));
  }
}
