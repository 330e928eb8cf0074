//! Subjects × raters matrix of scalar measurements.

use nalgebra::{DMatrix, DVector};

use crate::error::{IccError, Result};
use crate::statistics::{SumsOfSquares, VarianceDecomposition};
use crate::types::{Factor, Measurements};

/// Fully crossed scalar measurements: one value per subject per rater.
///
/// Rows are subjects (`n`), columns are raters (`k`). Entries are finite.
/// `n` or `k` equal to one is accepted here and reported as degenerate by
/// the estimator, since the failure is a division by zero degrees of freedom
/// rather than a malformed array.
#[derive(Debug, Clone, PartialEq)]
pub struct MeasurementMatrix {
    data: Measurements,
}

impl MeasurementMatrix {
    /// Wrap an `n × k` matrix.
    ///
    /// # Errors
    ///
    /// Returns `IccError::InvalidInput` if either axis is empty or any entry
    /// is NaN or infinite.
    pub fn new(data: DMatrix<f64>) -> Result<Self> {
        if data.nrows() == 0 {
            return Err(empty_axis(Factor::Subjects));
        }
        if data.ncols() == 0 {
            return Err(empty_axis(Factor::Raters));
        }
        if let Some(pos) = data.iter().position(|x| !x.is_finite()) {
            return Err(IccError::invalid_input(format!(
                "measurement matrix has a non-finite entry at storage index {}",
                pos
            )));
        }
        Ok(Self { data })
    }

    /// Build from a row-major slice of `subjects × raters` values.
    pub fn from_row_slice(subjects: usize, raters: usize, values: &[f64]) -> Result<Self> {
        let expected = subjects.checked_mul(raters).ok_or_else(|| {
            IccError::invalid_input("measurement matrix dimensions overflow")
        })?;
        if values.len() != expected {
            return Err(IccError::invalid_input(format!(
                "expected {} x {} = {} values, got {}",
                subjects,
                raters,
                expected,
                values.len()
            )));
        }
        Self::new(DMatrix::from_row_slice(subjects, raters, values))
    }

    /// Build from one row per subject.
    ///
    /// # Errors
    ///
    /// Rows of unequal length do not form a 2-D array and are rejected.
    pub fn from_rows<R: AsRef<[f64]>>(rows: &[R]) -> Result<Self> {
        let raters = rows.first().map_or(0, |row| row.as_ref().len());
        let mut values = Vec::with_capacity(rows.len() * raters);
        for (i, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != raters {
                return Err(IccError::invalid_input(format!(
                    "row {} has {} values, expected {}",
                    i,
                    row.len(),
                    raters
                )));
            }
            values.extend_from_slice(row);
        }
        Self::from_row_slice(rows.len(), raters, &values)
    }

    /// Underlying `n × k` matrix.
    pub fn as_matrix(&self) -> &Measurements {
        &self.data
    }

    /// Unwrap into the underlying matrix.
    pub fn into_inner(self) -> Measurements {
        self.data
    }

    /// Mean of all `n·k` entries (`u`).
    pub fn grand_mean(&self) -> f64 {
        self.data.mean()
    }

    /// Mean over raters for each subject (`u2`, length `n`).
    pub fn subject_means(&self) -> DVector<f64> {
        self.data.column_mean()
    }

    /// Mean over subjects for each rater (`u1`, length `k`).
    pub fn rater_means(&self) -> DVector<f64> {
        self.data.row_mean().transpose()
    }
}

impl TryFrom<DMatrix<f64>> for MeasurementMatrix {
    type Error = IccError;

    fn try_from(data: DMatrix<f64>) -> Result<Self> {
        Self::new(data)
    }
}

impl VarianceDecomposition for MeasurementMatrix {
    fn subjects(&self) -> usize {
        self.data.nrows()
    }

    fn raters(&self) -> usize {
        self.data.ncols()
    }

    /// Squared deviations, summed in nalgebra storage (column-major) order.
    fn sums_of_squares(&self) -> SumsOfSquares {
        let u = self.grand_mean();
        SumsOfSquares {
            total: squared_deviations(self.data.iter(), u),
            subjects: squared_deviations(self.subject_means().iter(), u),
            raters: squared_deviations(self.rater_means().iter(), u),
        }
    }
}

fn squared_deviations<'a>(values: impl Iterator<Item = &'a f64>, centre: f64) -> f64 {
    values.map(|x| (x - centre).powi(2)).sum()
}

fn empty_axis(factor: Factor) -> IccError {
    IccError::invalid_input(format!("measurement matrix has no {}", factor))
}
