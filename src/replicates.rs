//! Repeated agreement experiments.
//!
//! A simulated reliability study is typically repeated many times. For every
//! replicate two coefficients are computed:
//!
//! - **area ICC**: the scalar ICC of the per-shape pixel sums (areas, for
//!   binary masks)
//! - **shape ICC**: the shape ICC of the full rasters
//!
//! and the means over replicates are reported. Replicates share no state, so
//! they are evaluated in parallel when the `parallel` feature is enabled.

use serde::{Deserialize, Serialize};

use crate::error::{IccError, Result};
use crate::estimator::IccEstimator;
use crate::measurement::ShapeStack;
use crate::parallel::map_ordered;

/// Independent replicates of one agreement experiment.
#[derive(Debug, Clone, PartialEq)]
pub struct ReplicateSet {
    stacks: Vec<ShapeStack>,
}

impl ReplicateSet {
    /// Collect replicates.
    ///
    /// # Errors
    ///
    /// Returns `IccError::InvalidInput` if `stacks` is empty.
    pub fn new(stacks: Vec<ShapeStack>) -> Result<Self> {
        if stacks.is_empty() {
            return Err(IccError::invalid_input("no replicates"));
        }
        Ok(Self { stacks })
    }

    /// Split a row-major buffer of shape `(d_1, ..., d_m, n, k, R)` into `R`
    /// stacks along the trailing (replicate) axis.
    pub fn from_row_major(shape: &[usize], data: &[f64]) -> Result<Self> {
        let Some((&replicates, stack_shape)) = shape.split_last() else {
            return Err(IccError::invalid_input("replicate array has no axes"));
        };
        if replicates == 0 {
            return Err(IccError::invalid_input("no replicates"));
        }
        if data.len() % replicates != 0 {
            return Err(IccError::invalid_input(format!(
                "{} values cannot be split into {} replicates",
                data.len(),
                replicates
            )));
        }

        let stacks = (0..replicates)
            .map(|r| {
                let slice: Vec<f64> = data.iter().skip(r).step_by(replicates).copied().collect();
                ShapeStack::from_row_major(stack_shape, &slice)
            })
            .collect::<Result<Vec<_>>>()?;
        Self::new(stacks)
    }

    /// Number of replicates.
    pub fn len(&self) -> usize {
        self.stacks.len()
    }

    /// Always false; a set holds at least one replicate.
    pub fn is_empty(&self) -> bool {
        self.stacks.is_empty()
    }

    /// The replicate stacks, in order.
    pub fn stacks(&self) -> &[ShapeStack] {
        &self.stacks
    }
}

/// Per-replicate coefficients and their means.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReplicateSummary {
    /// Area ICC of each replicate.
    pub area_icc: Vec<f64>,
    /// Shape ICC of each replicate.
    pub shape_icc: Vec<f64>,
    /// Mean area ICC over replicates.
    pub mean_area_icc: f64,
    /// Mean shape ICC over replicates.
    pub mean_shape_icc: f64,
}

impl IccEstimator {
    /// Area and shape ICC of every replicate.
    ///
    /// # Errors
    ///
    /// The first failing replicate (in input order) is reported as
    /// `IccError::Replicate` wrapping the underlying error.
    pub fn analyze_replicates(&self, replicates: &ReplicateSet) -> Result<ReplicateSummary> {
        self.config().validate()?;

        let outcomes = map_ordered(replicates.stacks(), |index, stack| {
            tracing::trace!(index, "analyzing replicate");
            self.replicate_pair(stack).map_err(|source| IccError::Replicate {
                index,
                source: Box::new(source),
            })
        });

        let (area_icc, shape_icc): (Vec<f64>, Vec<f64>) =
            outcomes.into_iter().collect::<Result<Vec<_>>>()?.into_iter().unzip();

        let summary = ReplicateSummary {
            mean_area_icc: mean(&area_icc),
            mean_shape_icc: mean(&shape_icc),
            area_icc,
            shape_icc,
        };
        tracing::debug!(
            replicates = replicates.len(),
            mean_area_icc = summary.mean_area_icc,
            mean_shape_icc = summary.mean_shape_icc,
            "replicates analyzed"
        );
        Ok(summary)
    }

    fn replicate_pair(&self, stack: &ShapeStack) -> Result<(f64, f64)> {
        let areas = stack.area_measurements()?;
        Ok((self.coefficient(&areas)?, self.coefficient(stack)?))
    }
}

fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}
