//! Main `IccEstimator` entry point and builder.

use crate::config::Config;
use crate::error::Result;
use crate::result::IccResult;
use crate::statistics::{coefficient, confidence_bounds, f_value, MeanSquares, VarianceDecomposition};

/// ICC(2,1) / ICC(A,1) estimator for scalar measurements and shapes.
///
/// Use the builder methods to change the confidence level or the null
/// hypothesis, then hand any [`VarianceDecomposition`] to
/// [`coefficient`](Self::coefficient) or [`analyze`](Self::analyze).
///
/// # Example
///
/// ```
/// use shape_icc::{IccEstimator, MeasurementMatrix};
///
/// let ratings = MeasurementMatrix::from_rows(&[
///     [9.0, 2.0, 5.0, 8.0],
///     [6.0, 1.0, 3.0, 2.0],
///     [8.0, 4.0, 6.0, 8.0],
///     [7.0, 1.0, 2.0, 6.0],
///     [10.0, 5.0, 6.0, 9.0],
///     [6.0, 2.0, 4.0, 7.0],
/// ])?;
///
/// let result = IccEstimator::new().confidence(0.95).analyze(&ratings)?;
/// assert!((result.icc - 0.29).abs() < 0.01);
/// # Ok::<(), shape_icc::IccError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct IccEstimator {
    config: Config,
}

impl IccEstimator {
    /// Create with default configuration (95% interval, `r0 = 0`).
    pub fn new() -> Self {
        Self {
            config: Config::default(),
        }
    }

    /// Create from an explicit configuration.
    pub fn with_config(config: Config) -> Self {
        Self { config }
    }

    /// Set the confidence level of the interval.
    pub fn confidence(mut self, confidence: f64) -> Self {
        self.config.confidence = confidence;
        self
    }

    /// Set the correlation `r0` under the null hypothesis of the F test.
    pub fn null_correlation(mut self, r0: f64) -> Self {
        self.config.null_correlation = r0;
        self
    }

    /// Set the relative tolerance below which denominators count as zero.
    pub fn degeneracy_tolerance(mut self, tolerance: f64) -> Self {
        self.config.degeneracy_tolerance = tolerance;
        self
    }

    /// Get the current configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Mean squares of `data`.
    ///
    /// # Errors
    ///
    /// `IccError::Degenerate` when there are fewer than two subjects or raters.
    pub fn mean_squares<D>(&self, data: &D) -> Result<MeanSquares>
    where
        D: VarianceDecomposition + ?Sized,
    {
        let ms = MeanSquares::from_decomposition(data)?;
        tracing::debug!(
            subjects = ms.subjects,
            raters = ms.raters,
            ss = ms.ss,
            msr = ms.msr,
            msc = ms.msc,
            mse = ms.mse,
            "variance decomposition"
        );
        Ok(ms)
    }

    /// The intraclass correlation coefficient alone.
    ///
    /// # Errors
    ///
    /// - `IccError::InvalidConfig` if the configuration is out of range.
    /// - `IccError::Degenerate` if `n` or `k` is one, or the measurements have
    ///   no variance.
    pub fn coefficient<D>(&self, data: &D) -> Result<f64>
    where
        D: VarianceDecomposition + ?Sized,
    {
        self.config.validate()?;
        let ms = self.mean_squares(data)?;
        coefficient(&ms, self.config.degeneracy_tolerance)
    }

    /// The coefficient, its F-value and confidence bounds.
    ///
    /// # Errors
    ///
    /// As [`coefficient`](Self::coefficient), plus `IccError::Degenerate` when
    /// the F statistic or the interval is undefined (e.g. zero residual mean
    /// square or perfect agreement).
    pub fn analyze<D>(&self, data: &D) -> Result<IccResult>
    where
        D: VarianceDecomposition + ?Sized,
    {
        self.config.validate()?;
        let tolerance = self.config.degeneracy_tolerance;

        let ms = self.mean_squares(data)?;
        let icc = coefficient(&ms, tolerance)?;
        let f = f_value(&ms, self.config.null_correlation, tolerance)?;
        let (lower, upper) = confidence_bounds(&ms, icc, self.config.confidence, tolerance)?;

        let result = IccResult {
            icc,
            f_value: f,
            lower_bound: lower,
            upper_bound: upper,
            confidence: self.config.confidence,
            null_correlation: self.config.null_correlation,
            mean_squares: ms,
        };

        if !result.bounds_bracket_estimate() {
            tracing::warn!(
                icc,
                lower,
                upper,
                "confidence interval does not contain the ICC estimate"
            );
        }

        Ok(result)
    }
}
