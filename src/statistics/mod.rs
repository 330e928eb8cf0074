//! Statistical core shared by the scalar and shape estimators.
//!
//! This module provides:
//! - The two-way variance decomposition into mean squares
//! - The ICC(2,1) coefficient, F-value and Satterthwaite confidence bounds
//! - F-distribution quantiles

mod agreement;
mod decomposition;
mod fisher;

pub use agreement::{agreement_weights, coefficient, confidence_bounds, f_value, satterthwaite_df};
pub use decomposition::{MeanSquares, SumsOfSquares, VarianceDecomposition};
pub use fisher::f_quantile;
