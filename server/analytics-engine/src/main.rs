//! Binary entrypoint: read JSON lines from stdin, write JSON lines to stdout.
//!
//! Each input line is a request envelope. Output lines are either:
//! - A response envelope (CORRELATIONS_RESULT / TREND_RESULT)
//! - An ErrorOutput (when the line is invalid JSON or the payload is malformed)
//!
//! Requests with an unknown type tag are logged to stderr and produce no
//! output line.

use analytics_engine::types::ErrorOutput;
use analytics_engine::{Engine, EngineError};
use std::io::{self, BufRead, Write};
use tracing_subscriber::EnvFilter;

fn main() {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
    .with_writer(io::stderr)
    .init();

  let stdin = io::stdin();
  let stdout = io::stdout();
  let mut out = io::BufWriter::new(stdout.lock());
  let engine = Engine::with_defaults();

  for line in stdin.lock().lines() {
    let line = match line {
      Ok(l) => l,
      Err(e) => {
        let _ = writeln!(io::stderr(), "analytics-engine: read error: {}", e);
        std::process::exit(1);
      }
    };

    // Skip blank lines.
    let trimmed = line.trim();
    if trimmed.is_empty() {
      continue;
    }

    // Parse the raw envelope.
    let raw: serde_json::Value = match serde_json::from_str(trimmed) {
      Ok(v) => v,
      Err(e) => {
        let err = ErrorOutput::new(format!("json parse: {}", e));
        let _ = serde_json::to_writer(&mut out, &err);
        let _ = writeln!(out);
        continue;
      }
    };

    // Dispatch through the engine.
    match engine.handle_message(&raw) {
      Ok(Some(response)) => {
        let _ = serde_json::to_writer(&mut out, &response);
        let _ = writeln!(out);
      }
      Ok(None) => {
        // Unknown request type — warning already logged, no output.
      }
      Err(e) => {
        let err = match &e {
          EngineError::Payload { request, reason } => {
            ErrorOutput::new(reason.clone()).with_request(request.clone())
          }
          _ => ErrorOutput::new(e.to_string()),
        };
        let _ = serde_json::to_writer(&mut out, &err);
        let _ = writeln!(out);
      }
    }

    // Responses are consumed line by line by the host; don't sit in the buffer.
    let _ = out.flush();
  }

  let _ = out.flush();
}
