//! Frame shapes, their validation, and the inside-frame test
//!
//! Normalized frame space spans `[-1, 1] x [-1, 1]` with `+y` pointing up.
//! Every shape is scaled so its larger half extent is exactly `1.0`.

use crate::geometry::pins::Point;
use crate::io::error::{Result, invalid_parameter};

/// Physical boundary the pins are arranged around
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FrameShape {
    /// Unit circle
    Circle,
    /// Ellipse whose height is `ratio` times its width
    Ellipse {
        /// Height-to-width ratio, must be positive
        ratio: f64,
    },
    /// Rectangle whose width is `ratio` times its height
    Rectangle {
        /// Width-to-height ratio, must be positive
        ratio: f64,
    },
}

impl FrameShape {
    /// Half width and half height of the shape in normalized units
    ///
    /// The larger of the two is always `1.0`.
    pub fn half_extents(&self) -> (f64, f64) {
        match *self {
            Self::Circle => (1.0, 1.0),
            Self::Ellipse { ratio } => {
                let scale = ratio.max(1.0);
                (1.0 / scale, ratio / scale)
            }
            Self::Rectangle { ratio } => rectangle_half_extents(ratio),
        }
    }

    /// Short lowercase name used in logs and file names
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Circle => "circle",
            Self::Ellipse { .. } => "ellipse",
            Self::Rectangle { .. } => "rectangle",
        }
    }
}

/// Immutable frame description for one generation run
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameConfig {
    /// Boundary shape and its shape-specific parameters
    pub shape: FrameShape,
    /// Number of pins placed around the boundary
    pub num_pins: usize,
    /// Angle of the first pin in degrees, `0` at the top, clockwise
    pub start_angle_degrees: f64,
}

impl FrameConfig {
    /// Create a frame configuration
    pub const fn new(shape: FrameShape, num_pins: usize, start_angle_degrees: f64) -> Self {
        Self {
            shape,
            num_pins,
            start_angle_degrees,
        }
    }

    /// Reject geometry that cannot be constructed
    ///
    /// # Errors
    ///
    /// Returns [`crate::ThreadError::InvalidParameter`] if:
    /// - fewer than two pins are requested
    /// - the start angle is not finite
    /// - the ellipse or rectangle ratio is not a finite positive number
    pub fn validate(&self) -> Result<()> {
        if self.num_pins < 2 {
            return Err(invalid_parameter(
                "num_pins",
                &self.num_pins,
                &"at least two pins are required",
            ));
        }

        if !self.start_angle_degrees.is_finite() {
            return Err(invalid_parameter(
                "start_angle_degrees",
                &self.start_angle_degrees,
                &"must be finite",
            ));
        }

        match self.shape {
            FrameShape::Circle => Ok(()),
            FrameShape::Ellipse { ratio } => validate_ratio("ellipse_ratio", ratio),
            FrameShape::Rectangle { ratio } => validate_ratio("rect_ratio", ratio),
        }
    }

    /// Check whether a normalized point lies within the frame scaled by `radius`
    pub fn contains(&self, point: Point, radius: f64) -> bool {
        is_inside_frame(point, &self.shape, radius)
    }
}

fn validate_ratio(parameter: &'static str, ratio: f64) -> Result<()> {
    if ratio.is_finite() && ratio > 0.0 {
        Ok(())
    } else {
        Err(invalid_parameter(
            parameter,
            &ratio,
            &"must be a finite positive number",
        ))
    }
}

/// Half extents of a rectangle with the given width-to-height ratio
pub fn rectangle_half_extents(ratio: f64) -> (f64, f64) {
    if ratio >= 1.0 {
        (1.0, 1.0 / ratio)
    } else {
        (ratio, 1.0)
    }
}

/// Test a normalized point against the frame boundary shrunk by `radius`
///
/// Points exactly on the scaled boundary count as inside.
pub fn is_inside_frame(point: Point, shape: &FrameShape, radius: f64) -> bool {
    match *shape {
        FrameShape::Circle => point.x.mul_add(point.x, point.y * point.y) <= radius * radius,
        FrameShape::Ellipse { .. } => {
            let (half_w, half_h) = shape.half_extents();
            let nx = point.x / (radius * half_w);
            let ny = point.y / (radius * half_h);
            nx.mul_add(nx, ny * ny) <= 1.0
        }
        FrameShape::Rectangle { ratio } => {
            let (half_w, half_h) = rectangle_half_extents(ratio);
            point.x.abs() <= half_w * radius && point.y.abs() <= half_h * radius
        }
    }
}
