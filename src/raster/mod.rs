//! Pixel-space buffers and rasterization
//!
//! This module contains raster-related functionality including:
//! - Intensity fields for target and canvas
//! - Frame masks over the canvas
//! - Line tracing between pins
//! - Target image rasterization

/// Intensity field storage and darkening
pub mod field;
/// Line tracing between pixel positions
pub mod line;
/// Frame inside/outside tables
pub mod mask;
/// Source image to target field conversion
pub mod target;

pub use field::IntensityField;
pub use line::{PixelIndex, trace_pixels};
pub use target::{SourceImage, rasterize};
