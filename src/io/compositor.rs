//! Conversion of intensity fields into displayable images and PNG export

use std::path::Path;

use image::{GrayImage, Luma, Rgba, RgbaImage};

use crate::io::error::{Result, ThreadError};
use crate::raster::field::IntensityField;

/// Map an intensity in `[0, 1]` to an 8-bit channel value
pub fn to_channel(value: f64) -> u8 {
    (value * 255.0).round().clamp(0.0, 255.0) as u8
}

/// Render a field as an opaque grey RGBA image (R = G = B)
pub fn to_display_buffer(field: &IntensityField) -> RgbaImage {
    let side = field.resolution() as u32;
    RgbaImage::from_fn(side, side, |x, y| {
        let value = to_channel(field.get(y as usize, x as usize).unwrap_or(1.0));
        Rgba([value, value, value, 255])
    })
}

/// Render a field as a single-channel greyscale image
pub fn to_gray_image(field: &IntensityField) -> GrayImage {
    let side = field.resolution() as u32;
    GrayImage::from_fn(side, side, |x, y| {
        Luma([to_channel(field.get(y as usize, x as usize).unwrap_or(1.0))])
    })
}

/// Save the rendered field as a PNG image
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_field_as_png(field: &IntensityField, output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| ThreadError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    to_display_buffer(field)
        .save(output_path)
        .map_err(|e| ThreadError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })?;

    Ok(())
}
