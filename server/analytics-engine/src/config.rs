//! Engine configuration with sane defaults.

/// Tunable thresholds for correlation analysis.
#[derive(Debug, Clone)]
pub struct Config {
  /// Minimum number of daily records required to compute correlations.
  /// Fewer records yields an empty edge list, not an error.
  pub min_samples: usize,
  /// Significance threshold on |r|. Strictly exclusive: a coefficient of
  /// exactly this value is dropped.
  pub significance_threshold: f64,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      min_samples: 5,
      significance_threshold: 0.3,
    }
  }
}
