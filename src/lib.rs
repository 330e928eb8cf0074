//! # shape-icc
//!
//! Intraclass correlation for agreement studies, for scalar ratings and for
//! rasterized shapes.
//!
//! This crate computes the two-way random-effects, absolute-agreement ICC
//! (Shrout & Fleiss ICC(2,1), McGraw & Wong ICC(A,1)), outputting:
//! - The coefficient
//! - An F statistic for `H0: ICC = r0`
//! - A confidence interval with Satterthwaite degrees of freedom
//!
//! The shape variant follows Smith & Smith (2018), "Agreement and reliability
//! statistics for shapes", PLoS One 13(8): e0202087. Each (subject, rater)
//! shape is a raster; deviations are summed in absolute value over pixels
//! before being squared, so the statistic measures disagreement in the
//! size of the symmetric difference between shapes.
//!
//! ## Quick Start
//!
//! ```
//! use shape_icc::{icc, icc_with_stats, MeasurementMatrix};
//!
//! // 5 subjects rated by 3 raters
//! let ratings = MeasurementMatrix::from_rows(&[
//!     [1.0, 1.2, 0.9],
//!     [2.1, 2.0, 2.3],
//!     [3.2, 2.9, 3.1],
//!     [3.9, 4.2, 4.0],
//!     [5.1, 4.8, 5.3],
//! ])?;
//!
//! let coefficient = icc(&ratings)?;
//! let stats = icc_with_stats(&ratings)?;
//! assert_eq!(coefficient, stats.icc);
//! println!("ICC {:.3} [{:.3}, {:.3}]", stats.icc, stats.lower_bound, stats.upper_bound);
//! # Ok::<(), shape_icc::IccError>(())
//! ```
//!
//! ## Degenerate input
//!
//! Divisions by zero are reported as [`IccError::Degenerate`] instead of
//! producing NaN or infinity, so an ill-posed study (one rater, constant
//! ratings, raters that differ only by a constant offset) can be told apart
//! from a valid extreme result.

#![warn(missing_docs)]
#![warn(clippy::all)]

// Core modules
mod config;
mod constants;
mod error;
mod estimator;
mod parallel;
mod result;
mod types;

// Functional modules
pub mod measurement;
pub mod output;
pub mod replicates;
pub mod statistics;

// Re-exports for public API
pub use config::Config;
pub use constants::{DEFAULT_CONFIDENCE, DEFAULT_DEGENERACY_TOLERANCE, DEFAULT_NULL_CORRELATION};
pub use error::{DegenerateTerm, IccError, Result};
pub use estimator::IccEstimator;
pub use measurement::{MeasurementMatrix, ShapeStack};
pub use replicates::{ReplicateSet, ReplicateSummary};
pub use result::{IccResult, Reliability};
pub use statistics::{MeanSquares, VarianceDecomposition};
pub use types::{Factor, Measurements, PixelMatrix, PixelVector};

/// ICC(2,1) of an `n × k` measurement matrix with default configuration.
///
/// # Errors
///
/// `IccError::Degenerate` for fewer than two subjects or raters, or for
/// measurements without variance.
pub fn icc(measurements: &MeasurementMatrix) -> Result<f64> {
    IccEstimator::new().coefficient(measurements)
}

/// ICC(2,1), F-value and 95% confidence bounds of a measurement matrix.
///
/// # Errors
///
/// As [`icc`], plus `IccError::Degenerate` when the F-value or the bounds
/// divide by zero.
pub fn icc_with_stats(measurements: &MeasurementMatrix) -> Result<IccResult> {
    IccEstimator::new().analyze(measurements)
}

/// Shape ICC of a stack of rasterized shapes with default configuration.
///
/// # Errors
///
/// As [`icc`].
pub fn shape_icc(shapes: &ShapeStack) -> Result<f64> {
    IccEstimator::new().coefficient(shapes)
}

/// Shape ICC, F-value and 95% confidence bounds of a stack of shapes.
///
/// # Errors
///
/// As [`icc_with_stats`].
pub fn shape_icc_with_stats(shapes: &ShapeStack) -> Result<IccResult> {
    IccEstimator::new().analyze(shapes)
}
