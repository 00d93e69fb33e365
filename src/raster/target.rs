//! Conversion of a decoded source image into the target intensity field
//!
//! The centred square of the source is cropped and scaled to
//! `resolution x resolution`, converted to luminance, gamma adjusted, and masked so pixels
//! outside the frame are blank and never attract thread.

use std::path::Path;

use image::imageops::{self, FilterType};
use image::{DynamicImage, RgbaImage};

use crate::geometry::frame::FrameShape;
use crate::io::configuration::FRAME_INSET_RADIUS;
use crate::io::error::{Result, ThreadError, invalid_parameter, invalid_source};
use crate::raster::field::IntensityField;
use crate::raster::mask::FrameMask;

/// Decoded source image handed over by the acquisition layer
#[derive(Debug, Clone)]
pub struct SourceImage {
    pixels: RgbaImage,
}

impl SourceImage {
    /// Wrap an already decoded RGBA buffer
    pub const fn new(pixels: RgbaImage) -> Self {
        Self { pixels }
    }

    /// Build from raw RGB (3 bytes per pixel) or RGBA (4 bytes per pixel) data
    ///
    /// # Errors
    ///
    /// Returns an error if a dimension is zero or the byte count matches
    /// neither layout
    pub fn from_raw(width: u32, height: u32, bytes: Vec<u8>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(invalid_source(&format!(
                "image dimensions must be positive, got {width}x{height}"
            )));
        }

        let pixel_count = width as usize * height as usize;
        let len = bytes.len();
        let pixels = if len == pixel_count * 4 {
            RgbaImage::from_raw(width, height, bytes)
        } else if len == pixel_count * 3 {
            image::RgbImage::from_raw(width, height, bytes)
                .map(|rgb| DynamicImage::ImageRgb8(rgb).to_rgba8())
        } else {
            None
        };

        pixels.map(Self::new).ok_or_else(|| {
            invalid_source(&format!(
                "{len} bytes is neither RGB nor RGBA data for a {width}x{height} image"
            ))
        })
    }

    /// Decode an image file from disk
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or decoded
    pub fn open(path: &Path) -> Result<Self> {
        let decoded = image::open(path).map_err(|e| ThreadError::ImageLoad {
            path: path.to_path_buf(),
            source: e,
        })?;
        Ok(Self::new(decoded.to_rgba8()))
    }

    /// Source width in pixels
    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    /// Source height in pixels
    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    /// Underlying RGBA pixels
    pub const fn pixels(&self) -> &RgbaImage {
        &self.pixels
    }
}

/// Rasterize the source into a square, masked target field
///
/// # Errors
///
/// Returns an error if the resolution is zero or gamma is not a finite
/// positive number
pub fn rasterize(
    source: &SourceImage,
    resolution: usize,
    gamma: f64,
    shape: &FrameShape,
) -> Result<IntensityField> {
    if resolution == 0 {
        return Err(invalid_parameter(
            "resolution",
            &resolution,
            &"canvas resolution must be positive",
        ));
    }
    if !(gamma.is_finite() && gamma > 0.0) {
        return Err(invalid_parameter(
            "gamma",
            &gamma,
            &"must be a finite positive number",
        ));
    }

    let covered = scale_to_cover(source.pixels(), resolution);
    let mask = FrameMask::new(shape, resolution, FRAME_INSET_RADIUS);
    let mut field = IntensityField::blank(resolution);

    for row in 0..resolution {
        for col in 0..resolution {
            if !mask.contains(row, col) {
                continue;
            }
            let rgba = covered
                .get_pixel_checked(col as u32, row as u32)
                .map_or([255, 255, 255, 255], |p| p.0);
            field.set(row, col, apply_gamma(luminance(rgba), gamma));
        }
    }

    Ok(field)
}

/// Centre crop the largest square, then scale it to the canvas
///
/// Equivalent to scaling the whole image to cover the square and cropping
/// afterwards, but the working buffer never exceeds the source or canvas.
fn scale_to_cover(pixels: &RgbaImage, resolution: usize) -> RgbaImage {
    let (width, height) = pixels.dimensions();
    let crop = width.min(height);
    let square =
        imageops::crop_imm(pixels, (width - crop) / 2, (height - crop) / 2, crop, crop).to_image();

    let side = resolution as u32;
    if crop == side {
        square
    } else {
        imageops::resize(&square, side, side, FilterType::Triangle)
    }
}

/// Rec. 601 luminance in `[0, 1]`, composited over white by alpha
pub fn luminance(rgba: [u8; 4]) -> f64 {
    let [r, g, b, a] = rgba.map(f64::from);
    let coverage = a / 255.0;
    let blend = |channel: f64| channel.mul_add(coverage, 255.0 * (1.0 - coverage));
    let weighted = 0.114f64.mul_add(blend(b), 0.299f64.mul_add(blend(r), 0.587 * blend(g)));
    (weighted / 255.0).clamp(0.0, 1.0)
}

/// Raise clamped luminance to `gamma`; `1.0` leaves it untouched
pub fn apply_gamma(value: f64, gamma: f64) -> f64 {
    if (gamma - 1.0).abs() < f64::EPSILON {
        value
    } else {
        value.clamp(0.0, 1.0).powf(gamma)
    }
}
