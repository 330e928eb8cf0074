//! Default parameters of the ICC(2,1) estimator.

/// Default confidence level of the interval around the ICC.
pub const DEFAULT_CONFIDENCE: f64 = 0.95;

/// Correlation under the null hypothesis of the F test.
pub const DEFAULT_NULL_CORRELATION: f64 = 0.0;

/// Magnitude, relative to the total sum of squares, below which a
/// denominator is treated as zero.
pub const DEFAULT_DEGENERACY_TOLERANCE: f64 = 1e-12;
