//! Square intensity buffers for the target image and the thread canvas
//!
//! Values live in `[0, 1]` with `1.0` meaning blank (white) and `0.0` fully
//! dark. Pixels are addressed either by `(row, col)` or by the flat index
//! `row * resolution + col` produced by the line rasterizer.

use ndarray::Array2;

use crate::io::error::{Result, invalid_source};
use crate::raster::line::PixelIndex;

/// Square grid of per-pixel brightness values
#[derive(Debug, Clone, PartialEq)]
pub struct IntensityField {
    values: Array2<f64>,
}

impl IntensityField {
    /// Create a blank (all `1.0`) field
    pub fn blank(resolution: usize) -> Self {
        Self::filled(resolution, 1.0)
    }

    /// Create a field with every pixel set to `value`
    pub fn filled(resolution: usize, value: f64) -> Self {
        Self {
            values: Array2::from_elem((resolution, resolution), value),
        }
    }

    /// Wrap row-major values as a `resolution x resolution` field
    ///
    /// # Errors
    ///
    /// Returns an error if `values` does not hold exactly `resolution²` entries
    pub fn from_values(resolution: usize, values: Vec<f64>) -> Result<Self> {
        let len = values.len();
        let values =
            Array2::from_shape_vec((resolution, resolution), values).map_err(|shape_error| {
                invalid_source(&format!(
                    "expected {} intensity values for resolution {resolution}, got {len}: {shape_error}",
                    resolution * resolution
                ))
            })?;
        Ok(Self { values })
    }

    /// Canvas side length
    pub fn resolution(&self) -> usize {
        self.values.nrows()
    }

    /// Total number of pixels
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the field has no pixels
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Underlying 2D array indexed `[row, col]`
    pub const fn values(&self) -> &Array2<f64> {
        &self.values
    }

    /// Row-major view of all values
    pub fn as_slice(&self) -> &[f64] {
        self.values.as_slice().unwrap_or(&[])
    }

    /// Value at `(row, col)`
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        self.values.get([row, col]).copied()
    }

    /// Value at a flat pixel index
    pub fn value(&self, index: usize) -> Option<f64> {
        self.as_slice().get(index).copied()
    }

    /// Set the value at `(row, col)`, ignoring out-of-range positions
    pub fn set(&mut self, row: usize, col: usize, value: f64) {
        if let Some(slot) = self.values.get_mut([row, col]) {
            *slot = value;
        }
    }

    /// Multiply every listed pixel by `factor`
    ///
    /// Repeated indices are darkened once per occurrence. Out-of-range
    /// indices are skipped.
    pub fn darken(&mut self, indices: &[PixelIndex], factor: f64) {
        if let Some(slice) = self.values.as_slice_mut() {
            for &index in indices {
                if let Some(value) = slice.get_mut(index as usize) {
                    *value *= factor;
                }
            }
        }
    }

    /// Summed squared difference against another field of the same size
    ///
    /// # Errors
    ///
    /// Returns an error if the resolutions differ
    pub fn squared_error(&self, other: &Self) -> Result<f64> {
        if self.values.dim() != other.values.dim() {
            return Err(invalid_source(&format!(
                "cannot compare fields of resolution {} and {}",
                self.resolution(),
                other.resolution()
            )));
        }

        Ok(self
            .values
            .iter()
            .zip(other.values.iter())
            .map(|(a, b)| (a - b) * (a - b))
            .sum())
    }

    /// Mean intensity over all pixels, `1.0` for an empty field
    pub fn mean(&self) -> f64 {
        self.values.mean().unwrap_or(1.0)
    }
}
