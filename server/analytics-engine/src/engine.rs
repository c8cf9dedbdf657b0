//! Core engine: dispatches typed requests to the analysis routines.
//!
//! The engine is stateless — every request carries its full record window and
//! nothing persists between calls.

use serde_json::Value;
use tracing::warn;

use crate::config::Config;
use crate::correlation;
use crate::error::EngineError;
use crate::trend;
use crate::types::{Request, Response};

/// Request type tags the engine understands (wire values).
const KNOWN_REQUEST_TYPES: [&str; 2] = ["CALCULATE_CORRELATIONS", "PREDICT_TREND"];

/// The analytics engine. Holds only configuration.
pub struct Engine {
  config: Config,
}

impl Engine {
  pub fn new(config: Config) -> Self {
    Self { config }
  }

  pub fn with_defaults() -> Self {
    Self::new(Config::default())
  }

  /// Process a typed request. Infallible: every well-formed request has a
  /// defined response, including empty/short record windows.
  pub fn process(&self, request: &Request) -> Response {
    match request {
      Request::CalculateCorrelations(records) => {
        Response::Correlations(correlation::compute_correlations(records, &self.config))
      }
      Request::PredictTrend(records) => Response::Trend(trend::placeholder_trend(records)),
    }
  }

  /// Process a raw wire message.
  ///
  /// Unknown type tags are logged and dropped — `Ok(None)`, no response is
  /// ever sent for them. A known tag with a malformed payload is an error the
  /// caller may surface.
  pub fn handle_message(&self, raw: &Value) -> Result<Option<Response>, EngineError> {
    let kind = raw.get("type").and_then(Value::as_str).unwrap_or("");
    if !KNOWN_REQUEST_TYPES.contains(&kind) {
      warn!(request_type = kind, "dropping unknown request type");
      return Ok(None);
    }

    let request: Request = serde_json::from_value(raw.clone())
      .map_err(|e| EngineError::payload(kind, e.to_string()))?;
    Ok(Some(self.process(&request)))
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::types::{DailyMetricRecord, MetricKey, Trend};
  use chrono::NaiveDate;

  fn record(day: u32, sleep: f64, training: f64) -> DailyMetricRecord {
    DailyMetricRecord {
      date: NaiveDate::from_ymd_opt(2025, 3, day).unwrap(),
      sleep,
      training,
      nutrition: 0.0,
      learning: 0.0,
      screen: 0.0,
    }
  }

  fn linear_records() -> Vec<DailyMetricRecord> {
    (1..=5).map(|i| record(i, i as f64, i as f64)).collect()
  }

  #[test]
  fn correlations_request_returns_edges() {
    let engine = Engine::with_defaults();
    let response = engine.process(&Request::CalculateCorrelations(linear_records()));
    match response {
      Response::Correlations(edges) => {
        assert_eq!(edges.len(), 2);
        assert_eq!(edges[0].source, MetricKey::Sleep);
        assert_eq!(edges[0].target, MetricKey::Training);
      }
      other => panic!("wrong response: {:?}", other),
    }
  }

  #[test]
  fn trend_request_returns_placeholder() {
    let engine = Engine::with_defaults();
    let response = engine.process(&Request::PredictTrend(vec![]));
    match response {
      Response::Trend(summary) => {
        assert_eq!(summary.trend, Trend::Stable);
        assert_eq!(summary.confidence, 0.8);
      }
      other => panic!("wrong response: {:?}", other),
    }
  }

  #[test]
  fn unknown_type_tag_is_dropped() {
    let engine = Engine::with_defaults();
    let raw: Value = serde_json::from_str(r#"{"type": "EXPORT_REPORT", "payload": []}"#).unwrap();
    let result = engine.handle_message(&raw).unwrap();
    assert!(result.is_none());
  }

  #[test]
  fn missing_type_tag_is_dropped() {
    let engine = Engine::with_defaults();
    let raw: Value = serde_json::from_str(r#"{"payload": []}"#).unwrap();
    assert!(engine.handle_message(&raw).unwrap().is_none());
  }

  #[test]
  fn malformed_payload_is_an_error() {
    let engine = Engine::with_defaults();
    let raw: Value =
      serde_json::from_str(r#"{"type": "CALCULATE_CORRELATIONS", "payload": "not-records"}"#).unwrap();
    let err = engine.handle_message(&raw).unwrap_err();
    assert!(err.to_string().contains("CALCULATE_CORRELATIONS"));
  }

  #[test]
  fn known_tags_match_request_enum() {
    // Guard: the tag allowlist and the serde renames must not drift apart.
    for request in [
      Request::CalculateCorrelations(vec![]),
      Request::PredictTrend(vec![]),
    ] {
      let value = serde_json::to_value(&request).unwrap();
      let tag = value.get("type").and_then(Value::as_str).unwrap();
      assert!(KNOWN_REQUEST_TYPES.contains(&tag), "untracked tag: {}", tag);
    }
  }

  #[test]
  fn wire_message_round_trip() {
    let engine = Engine::with_defaults();
    let raw: Value = serde_json::from_str(
      r#"{"type": "PREDICT_TREND", "payload": [{"date": "2025-03-01", "sleep": 7}]}"#,
    )
    .unwrap();
    let response = engine.handle_message(&raw).unwrap().unwrap();
    let json = serde_json::to_string(&response).unwrap();
    assert!(json.contains("TREND_RESULT"));
    assert!(json.contains("stable"));
  }
}
