//! Quantiles of the F (Fisher-Snedecor) distribution.

use statrs::distribution::{ContinuousCDF, FisherSnedecor};
use statrs::function::beta::checked_beta_reg;

use crate::error::{DegenerateTerm, IccError, Result};

/// Bisection steps after bracketing. A bracket `[x, 2x]` reaches `f64`
/// resolution in about 53 steps.
const MAX_BISECTIONS: usize = 200;

/// Inverse CDF of the F distribution with `(df1, df2)` degrees of freedom.
///
/// Degrees of freedom may be fractional (the Satterthwaite approximation
/// produces non-integer values). The quantile is bracketed by doubling or
/// halving from 1 and then bisected. Probabilities above one half are
/// resolved on the upper tail `I_y(df2/2, df1/2)`, `y = df2 / (df2 + df1·x)`,
/// which stays accurate where the lower-tail CDF has already rounded to 1
/// (small `df2`, huge `x`).
///
/// # Errors
///
/// Returns `IccError::Degenerate(FDistribution)` when the distribution cannot
/// be constructed (non-positive or non-finite degrees of freedom) or the
/// quantile exceeds the `f64` range.
pub fn f_quantile(p: f64, df1: f64, df2: f64) -> Result<f64> {
    if !(p > 0.0 && p < 1.0) {
        return Err(undefined());
    }

    let dist = FisherSnedecor::new(df1, df2).map_err(|_| undefined())?;
    let tail = 1.0 - p;
    let ratio = df2 / df1;

    // Whether the quantile lies at or below `x`
    let covers = |x: f64| -> Result<bool> {
        if p <= 0.5 {
            return Ok(dist.cdf(x) >= p);
        }
        let y = ratio / (ratio + x);
        if y <= 0.0 {
            return Err(undefined());
        }
        let survival = checked_beta_reg(df2 / 2.0, df1 / 2.0, y).map_err(|_| undefined())?;
        Ok(survival <= tail)
    };

    let (mut low, mut high) = if covers(1.0)? {
        let mut high = 1.0_f64;
        let mut low = 0.5_f64;
        while covers(low)? {
            high = low;
            low *= 0.5;
            if low == 0.0 {
                return Ok(0.0);
            }
        }
        (low, high)
    } else {
        let mut low = 1.0_f64;
        let mut high = 2.0_f64;
        while !covers(high)? {
            low = high;
            high *= 2.0;
            if !high.is_finite() {
                return Err(undefined());
            }
        }
        (low, high)
    };

    for _ in 0..MAX_BISECTIONS {
        let mid = 0.5 * (low + high);
        if mid <= low || mid >= high {
            break;
        }
        if covers(mid)? {
            high = mid;
        } else {
            low = mid;
        }
    }

    Ok(0.5 * (low + high))
}

fn undefined() -> IccError {
    IccError::Degenerate(DegenerateTerm::FDistribution)
}
