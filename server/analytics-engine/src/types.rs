//! Core types for the analytics engine (JSON contracts + internal models).

use chrono::NaiveDate;
use serde::de::{self, IgnoredAny, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Metric keys (fixed set, fixed order)
// ---------------------------------------------------------------------------

/// The closed set of tracked metrics. Declaration order is the canonical
/// iteration order and determines output ordering of correlation edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MetricKey {
  Sleep,
  Training,
  Nutrition,
  Learning,
  Screen,
}

impl MetricKey {
  /// All metric keys in canonical order.
  pub const ALL: [MetricKey; 5] = [
    MetricKey::Sleep,
    MetricKey::Training,
    MetricKey::Nutrition,
    MetricKey::Learning,
    MetricKey::Screen,
  ];

  pub fn as_str(self) -> &'static str {
    match self {
      Self::Sleep => "sleep",
      Self::Training => "training",
      Self::Nutrition => "nutrition",
      Self::Learning => "learning",
      Self::Screen => "screen",
    }
  }
}

// ---------------------------------------------------------------------------
// Inbound types (JSON contract — what the host sends)
// ---------------------------------------------------------------------------

/// One day of metric scores. Unknown fields are silently ignored.
///
/// Metric fields are lenient: absent, null, or non-numeric values coerce to
/// 0.0 rather than failing the record. "No data" and "zero" are deliberately
/// the same value here; the host's seeder never distinguishes them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyMetricRecord {
  pub date: NaiveDate,
  #[serde(default, deserialize_with = "lenient_f64")]
  pub sleep: f64,
  #[serde(default, deserialize_with = "lenient_f64")]
  pub training: f64,
  #[serde(default, deserialize_with = "lenient_f64")]
  pub nutrition: f64,
  #[serde(default, deserialize_with = "lenient_f64")]
  pub learning: f64,
  #[serde(default, deserialize_with = "lenient_f64")]
  pub screen: f64,
}

impl DailyMetricRecord {
  pub fn metric(&self, key: MetricKey) -> f64 {
    match key {
      MetricKey::Sleep => self.sleep,
      MetricKey::Training => self.training,
      MetricKey::Nutrition => self.nutrition,
      MetricKey::Learning => self.learning,
      MetricKey::Screen => self.screen,
    }
  }
}

/// Coerce any JSON value to f64: numbers pass through, numeric strings parse,
/// booleans map to 1/0, everything else (null, arrays, objects, junk strings)
/// becomes 0.0. Never errors on a present value.
fn lenient_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
  D: Deserializer<'de>,
{
  struct LenientF64;

  impl<'de> Visitor<'de> for LenientF64 {
    type Value = f64;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
      f.write_str("a number-ish value")
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<f64, E> {
      Ok(if v.is_finite() { v } else { 0.0 })
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<f64, E> {
      Ok(v as f64)
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<f64, E> {
      Ok(v as f64)
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<f64, E> {
      Ok(if v { 1.0 } else { 0.0 })
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<f64, E> {
      Ok(v.trim().parse::<f64>().unwrap_or(0.0))
    }

    fn visit_unit<E: de::Error>(self) -> Result<f64, E> {
      Ok(0.0)
    }

    fn visit_none<E: de::Error>(self) -> Result<f64, E> {
      Ok(0.0)
    }

    fn visit_some<D2: Deserializer<'de>>(self, d: D2) -> Result<f64, D2::Error> {
      d.deserialize_any(LenientF64)
    }

    fn visit_seq<A: de::SeqAccess<'de>>(self, mut seq: A) -> Result<f64, A::Error> {
      while seq.next_element::<IgnoredAny>()?.is_some() {}
      Ok(0.0)
    }

    fn visit_map<A: de::MapAccess<'de>>(self, mut map: A) -> Result<f64, A::Error> {
      while map.next_entry::<IgnoredAny, IgnoredAny>()?.is_some() {}
      Ok(0.0)
    }
  }

  deserializer.deserialize_any(LenientF64)
}

// ---------------------------------------------------------------------------
// Outbound types (JSON contract — what we emit)
// ---------------------------------------------------------------------------

/// One significant correlation between two distinct metrics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorrelationEdge {
  pub source: MetricKey,
  pub target: MetricKey,
  /// Pearson coefficient, rounded to 2 decimals, in [-1, 1].
  pub value: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
  Stable,
}

/// Trend prediction result. Currently always the placeholder; see `trend`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendSummary {
  pub trend: Trend,
  pub confidence: f64,
}

// ---------------------------------------------------------------------------
// Message envelopes (host <-> engine)
// ---------------------------------------------------------------------------

/// Request from the host. Adjacently tagged so the wire shape is
/// `{"type": "...", "payload": [...]}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload")]
pub enum Request {
  #[serde(rename = "CALCULATE_CORRELATIONS")]
  CalculateCorrelations(Vec<DailyMetricRecord>),
  #[serde(rename = "PREDICT_TREND")]
  PredictTrend(Vec<DailyMetricRecord>),
}

/// Response to the host. Same envelope shape as `Request`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload")]
pub enum Response {
  #[serde(rename = "CORRELATIONS_RESULT")]
  Correlations(Vec<CorrelationEdge>),
  #[serde(rename = "TREND_RESULT")]
  Trend(TrendSummary),
}

// ---------------------------------------------------------------------------
// CLI stream wrappers
// ---------------------------------------------------------------------------

/// Structured error output for invalid input lines.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorOutput {
  pub error: bool,
  pub message: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub request: Option<String>,
}

impl ErrorOutput {
  pub fn new(message: impl Into<String>) -> Self {
    Self {
      error: true,
      message: message.into(),
      request: None,
    }
  }

  pub fn with_request(mut self, request: impl Into<String>) -> Self {
    self.request = Some(request.into());
    self
  }
}
