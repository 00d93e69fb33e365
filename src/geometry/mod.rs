//! Frame geometry and pin placement
//!
//! This module contains geometry-related functionality including:
//! - Frame shapes and the inside-frame test
//! - Pin placement in normalized space
//! - Mapping between normalized and pixel coordinates

/// Frame shapes and validation
pub mod frame;
/// Pin placement and coordinate mapping
pub mod pins;

pub use frame::{FrameConfig, FrameShape, is_inside_frame};
pub use pins::{Pin, PinLayout, Point, compute_pin_positions, coords_to_pixels, pixel_to_coords};
