//! Input arrays of an agreement study.
//!
//! This module provides the two validated input types:
//! - [`MeasurementMatrix`]: one scalar per (subject, rater) pair
//! - [`ShapeStack`]: one rasterized shape per (subject, rater) pair
//!
//! Both implement [`VarianceDecomposition`](crate::statistics::VarianceDecomposition),
//! so either can be handed to [`IccEstimator`](crate::IccEstimator).

mod matrix;
mod shape;

pub use matrix::MeasurementMatrix;
pub use shape::ShapeStack;
