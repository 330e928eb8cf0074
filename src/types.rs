//! Type aliases and common types.

use nalgebra::{DMatrix, DVector};

/// Subjects × raters matrix of scalar measurements.
pub type Measurements = DMatrix<f64>;

/// Pixels × shapes matrix: one column per flattened shape.
pub type PixelMatrix = DMatrix<f64>;

/// One value per pixel.
pub type PixelVector = DVector<f64>;

/// The two crossed factors of an agreement study.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Factor {
    /// Items being measured (rows of the measurement matrix).
    Subjects,
    /// Raters taking the measurements (columns of the measurement matrix).
    Raters,
}

impl std::fmt::Display for Factor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Subjects => write!(f, "subjects"),
            Self::Raters => write!(f, "raters"),
        }
    }
}
