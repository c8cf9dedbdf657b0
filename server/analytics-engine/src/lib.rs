//! Pulse Analytics Engine — pure biometric metric analysis (MVP).
//!
//! Computes pairwise Pearson correlations over a fixed set of daily metrics
//! and a placeholder trend summary. Invoked by the dashboard host through
//! typed request/response messages, either in-process via the [`worker`] or
//! as a subprocess speaking JSON lines over stdin/stdout.
//!
//! No AI, no DB, no network; pure computation, stateless per request.

pub mod config;
pub mod correlation;
pub mod engine;
pub mod error;
pub mod trend;
pub mod types;
pub mod worker;

pub use config::Config;
pub use engine::Engine;
pub use error::EngineError;
pub use types::{CorrelationEdge, DailyMetricRecord, Request, Response, TrendSummary};
