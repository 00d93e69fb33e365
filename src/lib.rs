//! Greedy string-art pattern generation
//!
//! Pins are placed around a circular, elliptical or rectangular frame and a
//! single continuous thread is wound between them. Each step draws the line
//! from the current pin that most reduces the squared error between the
//! simulated canvas and a grayscale rendition of the target image.

#![forbid(unsafe_code)]

/// Greedy line selection, candidate filtering and scoring
pub mod algorithm;
/// Frame shapes and pin placement
pub mod geometry;
/// Input/output operations and error handling
pub mod io;
/// Intensity fields, frame masks, line tracing and target rasterization
pub mod raster;

pub use io::error::{Result, ThreadError};
