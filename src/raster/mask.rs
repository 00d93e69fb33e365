//! Per-pixel inside/outside table for the frame boundary

use bitvec::prelude::*;

use crate::geometry::frame::{FrameShape, is_inside_frame};
use crate::geometry::pins::Point;

/// Which canvas pixels fall inside the (inset) frame
#[derive(Clone, Debug)]
pub struct FrameMask {
    inside: BitVec,
    resolution: usize,
}

impl FrameMask {
    /// Evaluate the frame test at every pixel of a square canvas
    pub fn new(shape: &FrameShape, resolution: usize, radius: f64) -> Self {
        let inside = (0..resolution * resolution)
            .map(|index| {
                let point = mask_point(index / resolution, index % resolution, resolution);
                is_inside_frame(point, shape, radius)
            })
            .collect();

        Self { inside, resolution }
    }

    /// Whether pixel `(row, col)` is inside the frame
    pub fn contains(&self, row: usize, col: usize) -> bool {
        row < self.resolution
            && col < self.resolution
            && self.inside.get(row * self.resolution + col).as_deref() == Some(&true)
    }

    /// Number of pixels inside the frame
    pub fn inside_count(&self) -> usize {
        self.inside.count_ones()
    }

    /// Canvas side length
    pub const fn resolution(&self) -> usize {
        self.resolution
    }
}

/// Normalized frame position of a pixel, centred on `resolution / 2`
pub fn mask_point(row: usize, col: usize, resolution: usize) -> Point {
    let half = resolution as f64 / 2.0;
    Point::new((col as f64 - half) / half, (half - row as f64) / half)
}
