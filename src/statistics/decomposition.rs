//! Two-way variance decomposition into mean squares.
//!
//! Both the scalar and the shape estimators reduce their input to three
//! aggregated sums of squares (total, between subjects, between raters).
//! They differ only in how a deviation is turned into a squared quantity:
//!
//! ```text
//! scalar:  Σ (x - u)²                  per entry, then summed
//! shape:   (Σ_p |x_p - u_p|)²          summed over pixels, then squared
//! ```
//!
//! Everything downstream of the sums of squares (mean squares, ICC, F-value,
//! confidence bounds) is shared.

use serde::{Deserialize, Serialize};

use crate::error::{DegenerateTerm, IccError, Result};

/// Unscaled sums of squares of a balanced two-way design.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SumsOfSquares {
    /// Deviations of every observation from the grand mean (`SS`).
    pub total: f64,
    /// Deviations of the subject means from the grand mean.
    pub subjects: f64,
    /// Deviations of the rater means from the grand mean.
    pub raters: f64,
}

/// Source of a two-way (subjects × raters) variance decomposition.
///
/// Implemented by [`MeasurementMatrix`](crate::MeasurementMatrix) with
/// elementwise squared deviations and by [`ShapeStack`](crate::ShapeStack)
/// with squared sums of absolute per-pixel deviations.
pub trait VarianceDecomposition {
    /// Number of subjects `n`.
    fn subjects(&self) -> usize;

    /// Number of raters `k`.
    fn raters(&self) -> usize;

    /// Aggregate the deviations from the grand mean.
    fn sums_of_squares(&self) -> SumsOfSquares;
}

/// Mean squares of the ICC(2,1) model.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MeanSquares {
    /// Number of subjects `n`.
    pub subjects: usize,
    /// Number of raters `k`.
    pub raters: usize,
    /// Total sum of squares `SS`.
    pub ss: f64,
    /// Mean square for rows (subjects).
    pub msr: f64,
    /// Mean square for columns (raters).
    pub msc: f64,
    /// Residual mean square.
    pub mse: f64,
}

impl MeanSquares {
    /// Scale the sums of squares of `source` into mean squares.
    ///
    /// ```text
    /// MSR = k/(n-1) · SS_subjects
    /// MSC = n/(k-1) · SS_raters
    /// MSE = (SS - (n-1)·MSR - (k-1)·MSC) / ((n-1)(k-1))
    /// ```
    ///
    /// # Errors
    ///
    /// `n = 1` or `k = 1` divides by zero degrees of freedom and is reported
    /// as `IccError::Degenerate`.
    pub fn from_decomposition<D>(source: &D) -> Result<Self>
    where
        D: VarianceDecomposition + ?Sized,
    {
        let n = source.subjects();
        let k = source.raters();
        if n < 2 {
            return Err(IccError::Degenerate(DegenerateTerm::SubjectDegreesOfFreedom));
        }
        if k < 2 {
            return Err(IccError::Degenerate(DegenerateTerm::RaterDegreesOfFreedom));
        }

        let sums = source.sums_of_squares();
        let (nf, kf) = (n as f64, k as f64);

        let msr = kf / (nf - 1.0) * sums.subjects;
        let msc = nf / (kf - 1.0) * sums.raters;
        let mse = (sums.total - (nf - 1.0) * msr - (kf - 1.0) * msc) / ((nf - 1.0) * (kf - 1.0));

        Ok(Self {
            subjects: n,
            raters: k,
            ss: sums.total,
            msr,
            msc,
            mse,
        })
    }

    /// Reference magnitude for deciding whether a mean-square expression is zero.
    pub(crate) fn scale(&self) -> f64 {
        self.ss.abs().max(f64::MIN_POSITIVE)
    }
}
