//! Stacks of rasterized N-dimensional shapes.
//!
//! A stack holds one shape per (subject, rater) pair. Input arrays have shape
//! `(d_1, ..., d_m, n, k)` in row-major order: the spatial axes come first,
//! followed by subjects and raters. Internally each shape is flattened into a
//! column of an `Npix × (n·k)` matrix, with column `i·k + j` holding subject
//! `i` as drawn by rater `j`.

use nalgebra::{DMatrix, DVector, DVectorView};

use crate::error::{IccError, Result};
use crate::measurement::MeasurementMatrix;
use crate::statistics::{SumsOfSquares, VarianceDecomposition};
use crate::types::{PixelMatrix, PixelVector};

/// Rasterized shapes, one per (subject, rater) pair.
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeStack {
    spatial: Vec<usize>,
    subjects: usize,
    raters: usize,
    pixels: PixelMatrix,
}

impl ShapeStack {
    /// Build from a row-major buffer with shape `(d_1, ..., d_m, n, k)`.
    ///
    /// # Errors
    ///
    /// Returns `IccError::InvalidInput` if `shape` has fewer than three axes,
    /// any axis is empty, the buffer length does not match, or a value is
    /// not finite.
    pub fn from_row_major(shape: &[usize], data: &[f64]) -> Result<Self> {
        let layout = Layout::from_shape(shape, data.len())?;
        if let Some(pos) = data.iter().position(|x| !x.is_finite()) {
            return Err(IccError::invalid_input(format!(
                "shape stack has a non-finite value at flat index {}",
                pos
            )));
        }
        let pixels = DMatrix::from_row_slice(layout.npix, layout.subjects * layout.raters, data);
        Ok(layout.into_stack(pixels))
    }

    /// Build from single-precision values, widened to `f64`.
    pub fn from_row_major_f32(shape: &[usize], data: &[f32]) -> Result<Self> {
        let widened: Vec<f64> = data.iter().map(|&x| f64::from(x)).collect();
        Self::from_row_major(shape, &widened)
    }

    /// Build from binary masks; `true` pixels count as 1.0.
    pub fn from_masks(shape: &[usize], masks: &[bool]) -> Result<Self> {
        let layout = Layout::from_shape(shape, masks.len())?;
        let pixels = DMatrix::from_row_iterator(
            layout.npix,
            layout.subjects * layout.raters,
            masks.iter().map(|&inside| if inside { 1.0 } else { 0.0 }),
        );
        Ok(layout.into_stack(pixels))
    }

    /// Build by evaluating `value(pixel, subject, rater)` for every flat pixel
    /// index of a shape with the given spatial extent.
    pub fn from_fn<F>(spatial: &[usize], subjects: usize, raters: usize, mut value: F) -> Result<Self>
    where
        F: FnMut(usize, usize, usize) -> f64,
    {
        let mut shape = spatial.to_vec();
        shape.extend([subjects, raters]);
        let npix = pixel_count(spatial)?;
        let total = npix
            .checked_mul(subjects)
            .and_then(|x| x.checked_mul(raters))
            .ok_or_else(|| IccError::invalid_input("shape stack size overflows"))?;

        let mut data = Vec::with_capacity(total);
        for p in 0..npix {
            for i in 0..subjects {
                for j in 0..raters {
                    data.push(value(p, i, j));
                }
            }
        }
        Self::from_row_major(&shape, &data)
    }

    /// Extent of each spatial axis.
    pub fn spatial_shape(&self) -> &[usize] {
        &self.spatial
    }

    /// Number of pixels (voxels) per shape, `Npix`.
    pub fn pixel_count(&self) -> usize {
        self.pixels.nrows()
    }

    /// The `Npix × (n·k)` matrix of flattened shapes.
    pub fn pixels(&self) -> &PixelMatrix {
        &self.pixels
    }

    /// Flattened shape of `subject` as drawn by `rater`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of range.
    pub fn shape(&self, subject: usize, rater: usize) -> DVectorView<'_, f64> {
        assert!(subject < self.subjects && rater < self.raters, "shape index out of range");
        self.pixels.column(self.column(subject, rater))
    }

    /// Per-pixel mean over subjects for each rater (`u1`, `Npix × k`).
    pub fn rater_means(&self) -> PixelMatrix {
        let n = self.subjects as f64;
        DMatrix::from_fn(self.pixel_count(), self.raters, |p, j| {
            (0..self.subjects)
                .map(|i| self.pixels[(p, self.column(i, j))])
                .sum::<f64>()
                / n
        })
    }

    /// Per-pixel mean over raters for each subject (`u2`, `Npix × n`).
    pub fn subject_means(&self) -> PixelMatrix {
        let k = self.raters as f64;
        DMatrix::from_fn(self.pixel_count(), self.subjects, |p, i| {
            (0..self.raters)
                .map(|j| self.pixels[(p, self.column(i, j))])
                .sum::<f64>()
                / k
        })
    }

    /// Per-pixel grand mean (`u`), the mean of the rater means.
    pub fn pixel_means(&self) -> PixelVector {
        self.rater_means().column_mean()
    }

    /// Sum of pixel values per shape, as an `n × k` measurement matrix.
    ///
    /// For binary masks this is the area (voxel count) of each shape.
    pub fn area_measurements(&self) -> Result<MeasurementMatrix> {
        let areas: Vec<f64> = self.pixels.column_iter().map(|shape| shape.sum()).collect();
        MeasurementMatrix::from_row_slice(self.subjects, self.raters, &areas)
    }

    fn column(&self, subject: usize, rater: usize) -> usize {
        subject * self.raters + rater
    }
}

impl VarianceDecomposition for ShapeStack {
    fn subjects(&self) -> usize {
        self.subjects
    }

    fn raters(&self) -> usize {
        self.raters
    }

    /// Squared sums of absolute per-pixel deviations.
    ///
    /// Pixels are summed in ascending flat order within a shape; shapes are
    /// visited in (subject, rater) lexicographic order.
    fn sums_of_squares(&self) -> SumsOfSquares {
        let u = self.pixel_means();
        let u1 = self.rater_means();
        let u2 = self.subject_means();

        SumsOfSquares {
            total: self
                .pixels
                .column_iter()
                .map(|shape| absolute_deviation(shape.iter(), &u).powi(2))
                .sum(),
            subjects: u2
                .column_iter()
                .map(|mean| absolute_deviation(mean.iter(), &u).powi(2))
                .sum(),
            raters: u1
                .column_iter()
                .map(|mean| absolute_deviation(mean.iter(), &u).powi(2))
                .sum(),
        }
    }
}

/// `Σ_p |x_p - u_p|`
fn absolute_deviation<'a>(values: impl Iterator<Item = &'a f64>, centre: &DVector<f64>) -> f64 {
    values.zip(centre.iter()).map(|(x, u)| (x - u).abs()).sum()
}

/// Product of the spatial extents, `Npix`.
fn pixel_count(spatial: &[usize]) -> Result<usize> {
    spatial
        .iter()
        .try_fold(1usize, |acc, &d| acc.checked_mul(d))
        .ok_or_else(|| IccError::invalid_input("shape stack pixel count overflows"))
}

/// Validated split of a stack shape into spatial and design axes.
struct Layout {
    spatial: Vec<usize>,
    subjects: usize,
    raters: usize,
    npix: usize,
}

impl Layout {
    fn from_shape(shape: &[usize], len: usize) -> Result<Self> {
        if shape.len() < 3 {
            return Err(IccError::invalid_input(format!(
                "shape stack needs at least one spatial axis plus subjects and raters, got {} axes",
                shape.len()
            )));
        }
        if let Some(axis) = shape.iter().position(|&d| d == 0) {
            return Err(IccError::invalid_input(format!(
                "shape stack axis {} has zero length",
                axis
            )));
        }

        let (spatial, design) = shape.split_at(shape.len() - 2);
        let npix = pixel_count(spatial)?;
        let expected = npix
            .checked_mul(design[0])
            .and_then(|x| x.checked_mul(design[1]))
            .ok_or_else(|| IccError::invalid_input("shape stack size overflows"))?;
        if len != expected {
            return Err(IccError::invalid_input(format!(
                "shape {:?} needs {} values, got {}",
                shape, expected, len
            )));
        }

        Ok(Self {
            spatial: spatial.to_vec(),
            subjects: design[0],
            raters: design[1],
            npix,
        })
    }

    fn into_stack(self, pixels: PixelMatrix) -> ShapeStack {
        ShapeStack {
            spatial: self.spatial,
            subjects: self.subjects,
            raters: self.raters,
            pixels,
        }
    }
}
