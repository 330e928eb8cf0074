//! Configuration for ICC estimation.

use crate::constants::{
    DEFAULT_CONFIDENCE, DEFAULT_DEGENERACY_TOLERANCE, DEFAULT_NULL_CORRELATION,
};
use crate::error::{IccError, Result};

/// Configuration options for `IccEstimator`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    /// Confidence level of the interval around the ICC (default: 0.95).
    pub confidence: f64,

    /// Correlation `r0` under the null hypothesis of the F test (default: 0.0).
    pub null_correlation: f64,

    /// Relative tolerance for treating a denominator as zero (default: 1e-12).
    ///
    /// Denominators built from mean squares are compared against
    /// `tolerance * SS`; the dimensionless `1 - icc` is compared against
    /// `tolerance` directly. Set to 0.0 to only reject exact zeros.
    pub degeneracy_tolerance: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            confidence: DEFAULT_CONFIDENCE,
            null_correlation: DEFAULT_NULL_CORRELATION,
            degeneracy_tolerance: DEFAULT_DEGENERACY_TOLERANCE,
        }
    }
}

impl Config {
    /// Significance level `alpha = 1 - confidence`.
    pub fn alpha(&self) -> f64 {
        1.0 - self.confidence
    }

    /// Check that every parameter is in range.
    ///
    /// # Errors
    ///
    /// Returns `IccError::InvalidConfig` if `confidence` is outside (0, 1),
    /// `null_correlation` is outside [0, 1), or the tolerance is negative or
    /// not finite.
    pub fn validate(&self) -> Result<()> {
        if !(self.confidence > 0.0 && self.confidence < 1.0) {
            return Err(IccError::InvalidConfig(format!(
                "confidence must be in (0, 1), got {}",
                self.confidence
            )));
        }
        if !(self.null_correlation >= 0.0 && self.null_correlation < 1.0) {
            return Err(IccError::InvalidConfig(format!(
                "null correlation must be in [0, 1), got {}",
                self.null_correlation
            )));
        }
        if !(self.degeneracy_tolerance.is_finite() && self.degeneracy_tolerance >= 0.0) {
            return Err(IccError::InvalidConfig(format!(
                "degeneracy tolerance must be finite and non-negative, got {}",
                self.degeneracy_tolerance
            )));
        }
        Ok(())
    }
}
