//! Pin placement around the frame and normalized-to-pixel mapping

use std::f64::consts::{FRAC_PI_2, PI, TAU};

use crate::geometry::frame::{FrameConfig, FrameShape, rectangle_half_extents};
use crate::io::error::{Result, invalid_parameter};

/// A 2D coordinate, either in normalized frame space or in pixel space
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    /// Horizontal coordinate
    pub x: f64,
    /// Vertical coordinate
    pub y: f64,
}

impl Point {
    /// Create a point
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point
    pub fn distance(&self, other: &Self) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// A single pin with its 1-based index and both coordinate forms
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pin {
    /// 1-based pin index in `[1, num_pins]`
    pub index: usize,
    /// Position in normalized frame space
    pub normalized: Point,
    /// Position in pixel space for the layout's resolution
    pub pixel: Point,
}

/// Pins for one frame, mapped onto a canvas of fixed resolution
///
/// Normalized positions are computed once; pixel positions are recomputed
/// whenever the resolution changes.
#[derive(Debug, Clone)]
pub struct PinLayout {
    normalized: Vec<Point>,
    pixels: Vec<Point>,
    resolution: usize,
}

impl PinLayout {
    /// Place pins for `frame` on a `resolution x resolution` canvas
    ///
    /// # Errors
    ///
    /// Returns an error if the frame configuration is invalid or the
    /// resolution is zero
    pub fn new(frame: &FrameConfig, resolution: usize) -> Result<Self> {
        validate_resolution(resolution)?;
        let normalized = compute_pin_positions(frame)?;
        let pixels = coords_to_pixels(&normalized, resolution);
        Ok(Self {
            normalized,
            pixels,
            resolution,
        })
    }

    /// Recompute pixel positions for a new canvas resolution
    ///
    /// # Errors
    ///
    /// Returns an error if the resolution is zero
    pub fn rescale(&mut self, resolution: usize) -> Result<()> {
        validate_resolution(resolution)?;
        self.pixels = coords_to_pixels(&self.normalized, resolution);
        self.resolution = resolution;
        Ok(())
    }

    /// Number of pins
    pub const fn len(&self) -> usize {
        self.normalized.len()
    }

    /// Whether the layout has no pins
    pub const fn is_empty(&self) -> bool {
        self.normalized.is_empty()
    }

    /// Canvas side length the pixel positions were computed for
    pub const fn resolution(&self) -> usize {
        self.resolution
    }

    /// Normalized pin positions, index 0 is pin 1
    pub fn normalized(&self) -> &[Point] {
        &self.normalized
    }

    /// Pixel pin positions, index 0 is pin 1
    pub fn pixels(&self) -> &[Point] {
        &self.pixels
    }

    /// Look up a pin by its 1-based index
    pub fn pin(&self, index: usize) -> Option<Pin> {
        let slot = index.checked_sub(1)?;
        let normalized = *self.normalized.get(slot)?;
        let pixel = *self.pixels.get(slot)?;
        Some(Pin {
            index,
            normalized,
            pixel,
        })
    }
}

fn validate_resolution(resolution: usize) -> Result<()> {
    if resolution == 0 {
        return Err(invalid_parameter(
            "resolution",
            &resolution,
            &"canvas resolution must be positive",
        ));
    }
    Ok(())
}

/// Compute normalized positions for every pin of the frame
///
/// The returned vector holds `num_pins` points; element `k` is pin `k + 1`.
///
/// # Errors
///
/// Returns an error if the frame configuration is invalid
pub fn compute_pin_positions(frame: &FrameConfig) -> Result<Vec<Point>> {
    frame.validate()?;

    let num_pins = frame.num_pins;
    let start = frame.start_angle_degrees;
    let pins = match frame.shape {
        FrameShape::Circle => circle_pins(num_pins, start),
        FrameShape::Ellipse { ratio } => ellipse_pins(num_pins, start, ratio),
        FrameShape::Rectangle { ratio } => rectangle_pins(num_pins, start, ratio),
    };

    Ok(pins)
}

// Converts a clockwise-from-top angle into the standard counterclockwise-from-x angle
fn pin_angle(index: usize, num_pins: usize, start_degrees: f64) -> f64 {
    let degrees = start_degrees + 360.0 * index as f64 / num_pins as f64;
    FRAC_PI_2 - degrees.to_radians()
}

fn circle_pins(num_pins: usize, start_degrees: f64) -> Vec<Point> {
    (0..num_pins)
        .map(|i| {
            let theta = pin_angle(i, num_pins, start_degrees);
            Point::new(theta.cos(), theta.sin())
        })
        .collect()
}

fn ellipse_pins(num_pins: usize, start_degrees: f64, ratio: f64) -> Vec<Point> {
    // Largest extent of (cos, ratio * sin) over all angles
    let scale = ratio.max(1.0);
    (0..num_pins)
        .map(|i| {
            let theta = pin_angle(i, num_pins, start_degrees);
            Point::new(theta.cos() / scale, ratio * theta.sin() / scale)
        })
        .collect()
}

fn rectangle_pins(num_pins: usize, start_degrees: f64, ratio: f64) -> Vec<Point> {
    let (half_w, half_h) = rectangle_half_extents(ratio);
    let perimeter = 4.0 * (half_w + half_h);
    let spacing = perimeter / num_pins as f64;

    let mut pins: Vec<Point> = (0..num_pins)
        .map(|i| perimeter_point(i as f64 * spacing, half_w, half_h))
        .collect();

    let offset = closest_to_angle(&pins, start_degrees.to_radians());
    pins.rotate_left(offset);
    pins
}

/// Walk `distance` clockwise along the rectangle perimeter from the top-left corner
fn perimeter_point(distance: f64, half_w: f64, half_h: f64) -> Point {
    let width = 2.0 * half_w;
    let height = 2.0 * half_h;

    if distance < width {
        Point::new(-half_w + distance, half_h)
    } else if distance < width + height {
        Point::new(half_w, half_h - (distance - width))
    } else if distance < 2.0f64.mul_add(width, height) {
        Point::new(half_w - (distance - width - height), -half_h)
    } else {
        let travelled = distance - 2.0f64.mul_add(width, height);
        Point::new(-half_w, (-half_h + travelled).min(half_h))
    }
}

/// Index of the point whose clockwise-from-top angle is nearest `target`
///
/// Ties resolve to the lowest index.
fn closest_to_angle(points: &[Point], target: f64) -> usize {
    let mut best_index = 0;
    let mut best_difference = f64::INFINITY;

    for (index, point) in points.iter().enumerate() {
        let difference = wrap_angle(point.x.atan2(point.y) - target).abs();
        if difference < best_difference {
            best_difference = difference;
            best_index = index;
        }
    }

    best_index
}

/// Wrap an angle in radians to `[-PI, PI]`
pub fn wrap_angle(angle: f64) -> f64 {
    let wrapped = angle % TAU;
    if wrapped > PI {
        wrapped - TAU
    } else if wrapped < -PI {
        wrapped + TAU
    } else {
        wrapped
    }
}

/// Map normalized pins onto pixel space for a square canvas
///
/// The vertical axis flips because pixel rows grow downward.
pub fn coords_to_pixels(points: &[Point], resolution: usize) -> Vec<Point> {
    let span = resolution.saturating_sub(1) as f64;
    points
        .iter()
        .map(|p| {
            Point::new(
                (p.x + 1.0) * 0.5 * span,
                (1.0 - (p.y + 1.0) * 0.5) * span,
            )
        })
        .collect()
}

/// Inverse of [`coords_to_pixels`] for a single point
///
/// A single-pixel canvas maps everything to the origin.
pub fn pixel_to_coords(pixel: Point, resolution: usize) -> Point {
    let span = resolution.saturating_sub(1) as f64;
    if span == 0.0 {
        return Point::default();
    }
    Point::new(
        2.0f64.mul_add(pixel.x / span, -1.0),
        2.0f64.mul_add(-pixel.y / span, 1.0),
    )
}
