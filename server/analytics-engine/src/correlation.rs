//! Pairwise Pearson correlation over the fixed metric set.
//!
//! Produces a sparse graph of metric pairs whose coefficient clears the
//! significance threshold. Both (a,b) and (b,a) are emitted for each
//! significant pair — Pearson is symmetric, but the mirror edge is part of
//! the output contract the dashboard renders, so it stays.

use crate::config::Config;
use crate::types::{CorrelationEdge, DailyMetricRecord, MetricKey};

/// Pearson correlation coefficient between two equal-length vectors.
///
/// `r = (n·Σxy − Σx·Σy) / sqrt((n·Σx² − (Σx)²) · (n·Σy² − (Σy)²))`
///
/// Zero variance in either vector makes the denominator 0; that case is
/// defined as r = 0 rather than an error.
pub fn pearson(x: &[f64], y: &[f64]) -> f64 {
  debug_assert_eq!(x.len(), y.len());
  let n = x.len() as f64;

  let mut sum_x = 0.0;
  let mut sum_y = 0.0;
  let mut sum_xy = 0.0;
  let mut sum_x2 = 0.0;
  let mut sum_y2 = 0.0;
  for (&xi, &yi) in x.iter().zip(y) {
    sum_x += xi;
    sum_y += yi;
    sum_xy += xi * yi;
    sum_x2 += xi * xi;
    sum_y2 += yi * yi;
  }

  let var_x = n * sum_x2 - sum_x * sum_x;
  let var_y = n * sum_y2 - sum_y * sum_y;
  // <= 0 also catches the tiny negatives float error produces for constant vectors.
  if var_x <= 0.0 || var_y <= 0.0 {
    return 0.0;
  }

  (n * sum_xy - sum_x * sum_y) / (var_x * var_y).sqrt()
}

/// Round to 2 decimal places, half away from zero.
pub fn round2(v: f64) -> f64 {
  (v * 100.0).round() / 100.0
}

/// Compute the significant-correlation graph over a record window.
///
/// Fewer than `config.min_samples` records yields an empty graph — a defined
/// boundary case, not an error. The significance filter compares the raw
/// (unrounded) coefficient; only retained values are rounded.
///
/// Edges are emitted in canonical key order: outer loop over `source`, inner
/// over `target`, skipping `source == target`.
pub fn compute_correlations(records: &[DailyMetricRecord], config: &Config) -> Vec<CorrelationEdge> {
  if records.len() < config.min_samples {
    return Vec::new();
  }

  // One vector per key, in canonical order. Missing values already defaulted
  // to 0 at deserialization.
  let vectors: Vec<Vec<f64>> = MetricKey::ALL
    .iter()
    .map(|&key| records.iter().map(|r| r.metric(key)).collect())
    .collect();

  let mut edges = Vec::new();
  for (i, &source) in MetricKey::ALL.iter().enumerate() {
    for (j, &target) in MetricKey::ALL.iter().enumerate() {
      if i == j {
        continue;
      }
      let r = pearson(&vectors[i], &vectors[j]);
      if r.abs() > config.significance_threshold {
        edges.push(CorrelationEdge {
          source,
          target,
          value: round2(r),
        });
      }
    }
  }

  edges
}
