//! Estimation result types.

use serde::{Deserialize, Serialize};

use crate::statistics::MeanSquares;

/// ICC together with its F test and confidence interval.
///
/// All four statistics are always computed. Callers interested only in the
/// coefficient can use [`IccEstimator::coefficient`](crate::IccEstimator::coefficient),
/// which skips the F test and the interval.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IccResult {
    /// ICC(2,1) / ICC(A,1). Not clamped to [-1, 1].
    pub icc: f64,

    /// F statistic for the null hypothesis `ICC = r0`.
    pub f_value: f64,

    /// Lower confidence bound.
    pub lower_bound: f64,

    /// Upper confidence bound.
    pub upper_bound: f64,

    /// Confidence level of the bounds (e.g. 0.95).
    pub confidence: f64,

    /// Null correlation `r0` of the F test.
    pub null_correlation: f64,

    /// Variance decomposition the statistics were computed from.
    pub mean_squares: MeanSquares,
}

impl IccResult {
    /// The `(icc, F, lower, upper)` tuple.
    pub fn as_tuple(&self) -> (f64, f64, f64, f64) {
        (self.icc, self.f_value, self.lower_bound, self.upper_bound)
    }

    /// Whether `lower ≤ icc ≤ upper`.
    ///
    /// The bounds come from two separate F quantiles with approximate
    /// (Satterthwaite) degrees of freedom, so on unusual inputs they can miss
    /// the point estimate. This is a property of the approximation, not an
    /// error, and the values are reported unchanged.
    pub fn bounds_bracket_estimate(&self) -> bool {
        self.lower_bound <= self.icc && self.icc <= self.upper_bound
    }

    /// Qualitative reading of the coefficient.
    pub fn reliability(&self) -> Reliability {
        Reliability::from_coefficient(self.icc)
    }
}

/// Qualitative reliability bands.
///
/// Based on Koo & Li (2016) guidelines for ICC interpretation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Reliability {
    /// ICC < 0.5.
    Poor,
    /// 0.5 ≤ ICC < 0.75.
    Moderate,
    /// 0.75 ≤ ICC < 0.9.
    Good,
    /// ICC ≥ 0.9.
    Excellent,
}

impl Reliability {
    /// Classify an ICC value.
    pub fn from_coefficient(icc: f64) -> Self {
        if icc >= 0.9 {
            Reliability::Excellent
        } else if icc >= 0.75 {
            Reliability::Good
        } else if icc >= 0.5 {
            Reliability::Moderate
        } else {
            Reliability::Poor
        }
    }
}
