//! ICC(2,1) / ICC(A,1) coefficient, F-value and confidence bounds.
//!
//! Formulas follow McGraw & Wong (1996), case A,1, as implemented by the
//! `irr` R package:
//!
//! ```text
//! icc = (MSR - MSE) / (MSR + (k-1)·MSE + (k/n)·(MSC - MSE))
//! a   = k·r / (n·(1-r))
//! b   = 1 + k·r·(n-1) / (n·(1-r))
//! F   = MSR / (a·MSC + b·MSE)                                   with r = r0
//! v   = (a·MSC + b·MSE)² / ((a·MSC)²/(k-1) + (b·MSE)²/((n-1)(k-1)))   with r = icc
//! ```
//!
//! The interval is obtained from two independent F quantiles with `v`
//! Satterthwaite degrees of freedom, not by inverting the coefficient. On
//! pathological inputs it may therefore fail to contain the point estimate.

use crate::error::{DegenerateTerm, IccError, Result};

use super::decomposition::MeanSquares;
use super::fisher::f_quantile;

/// Absolute-agreement intraclass correlation.
pub fn coefficient(ms: &MeanSquares, tolerance: f64) -> Result<f64> {
    let (n, k) = dims(ms);
    let denominator = ms.msr + (k - 1.0) * ms.mse + (k / n) * (ms.msc - ms.mse);
    nonzero(denominator, tolerance * ms.scale(), DegenerateTerm::CoefficientDenominator)?;
    Ok((ms.msr - ms.mse) / denominator)
}

/// Weights `(a, b)` of the rater and residual mean squares for a given
/// correlation `r`.
pub fn agreement_weights(ms: &MeanSquares, r: f64) -> (f64, f64) {
    let (n, k) = dims(ms);
    let a = (k * r) / (n * (1.0 - r));
    let b = 1.0 + (k * r * (n - 1.0)) / (n * (1.0 - r));
    (a, b)
}

/// F statistic for `H0: ICC = null_correlation`.
pub fn f_value(ms: &MeanSquares, null_correlation: f64, tolerance: f64) -> Result<f64> {
    let (a, b) = agreement_weights(ms, null_correlation);
    let denominator = a * ms.msc + b * ms.mse;
    nonzero(denominator, tolerance * ms.scale(), DegenerateTerm::FValueDenominator)?;
    Ok(ms.msr / denominator)
}

/// Satterthwaite degrees of freedom for the given weights.
///
/// Computed from the weights' shares of `a·MSC + b·MSE`, so the result does
/// not depend on the scale of the data. When `a < 0` (negative ICC) the two
/// terms can cancel; a sum within `tolerance` of the terms' magnitude leaves
/// the degrees of freedom undefined.
pub fn satterthwaite_df(ms: &MeanSquares, a: f64, b: f64, tolerance: f64) -> Result<f64> {
    let (n, k) = dims(ms);
    let rater_term = a * ms.msc;
    let error_term = b * ms.mse;
    let total = rater_term + error_term;
    let magnitude = rater_term.abs() + error_term.abs();
    nonzero(
        total,
        tolerance * magnitude.max(f64::MIN_POSITIVE),
        DegenerateTerm::SatterthwaiteDegreesOfFreedom,
    )?;

    let rater_share = rater_term / total;
    let error_share = error_term / total;
    let v = 1.0 / (rater_share.powi(2) / (k - 1.0) + error_share.powi(2) / ((n - 1.0) * (k - 1.0)));

    if v.is_finite() && v > 0.0 {
        Ok(v)
    } else {
        Err(IccError::Degenerate(DegenerateTerm::SatterthwaiteDegreesOfFreedom))
    }
}

/// Two-sided confidence interval `(lower, upper)` for `coeff` at `confidence`.
pub fn confidence_bounds(
    ms: &MeanSquares,
    coeff: f64,
    confidence: f64,
    tolerance: f64,
) -> Result<(f64, f64)> {
    let (n, k) = dims(ms);
    let alpha = 1.0 - confidence;
    let scale = tolerance * ms.scale();

    nonzero(1.0 - coeff, tolerance, DegenerateTerm::PerfectAgreement)?;
    let (a, b) = agreement_weights(ms, coeff);
    let v = satterthwaite_df(ms, a, b, tolerance)?;

    let p = 1.0 - alpha / 2.0;
    let fl = f_quantile(p, n - 1.0, v)?;
    let fu = f_quantile(p, v, n - 1.0)?;

    let rater_error = k * ms.msc + (k * n - k - n) * ms.mse;

    let lower_den = fl * rater_error + n * ms.msr;
    nonzero(lower_den, scale, DegenerateTerm::LowerBoundDenominator)?;
    let lower = (n * (ms.msr - fl * ms.mse)) / lower_den;

    let upper_den = rater_error + n * fu * ms.msr;
    nonzero(upper_den, scale, DegenerateTerm::UpperBoundDenominator)?;
    let upper = (n * (fu * ms.msr - ms.mse)) / upper_den;

    Ok((lower, upper))
}

fn dims(ms: &MeanSquares) -> (f64, f64) {
    (ms.subjects as f64, ms.raters as f64)
}

fn nonzero(value: f64, threshold: f64, term: DegenerateTerm) -> Result<()> {
    if value.is_finite() && value.abs() > threshold {
        Ok(())
    } else {
        tracing::debug!(%term, value, threshold, "degenerate term");
        Err(IccError::Degenerate(term))
    }
}
