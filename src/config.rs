//! Numerical tolerances for the matrix engine.

use crate::error::{MatrixError, Result};

/// Pivots with an absolute value below this are treated as zero.
pub const DEFAULT_SINGULARITY_THRESHOLD: f64 = 1e-10;

/// Engine settings passed to the `*_with` variants of inversion and division.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EngineConfig {
    singularity_threshold: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            singularity_threshold: DEFAULT_SINGULARITY_THRESHOLD,
        }
    }
}

impl EngineConfig {
    /// Replace the singularity threshold. Must be finite and non-negative.
    pub fn with_singularity_threshold(mut self, threshold: f64) -> Result<Self> {
        if !threshold.is_finite() || threshold < 0.0 {
            return Err(MatrixError::InvalidThreshold(threshold));
        }
        self.singularity_threshold = threshold;
        Ok(self)
    }

    pub fn singularity_threshold(&self) -> f64 {
        self.singularity_threshold
    }

    pub(crate) fn is_default(&self) -> bool {
        self.singularity_threshold == DEFAULT_SINGULARITY_THRESHOLD
    }
}
