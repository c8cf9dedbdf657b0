//! Structured error types for the analytics engine.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
  #[error("payload: {request}: {reason}")]
  Payload { request: String, reason: String },

  #[error("worker: {0}")]
  Worker(String),

  #[error("json: {0}")]
  Json(#[from] serde_json::Error),
}

impl EngineError {
  pub fn payload(request: &str, reason: impl Into<String>) -> Self {
    Self::Payload {
      request: request.to_string(),
      reason: reason.into(),
    }
  }
}
