//! Frame capture and GIF generation showing the thread pattern build up

use std::path::Path;

use image::{Delay, Frame, RgbaImage};

use crate::io::compositor::to_display_buffer;
use crate::io::error::{Result, ThreadError, invalid_source};
use crate::raster::field::IntensityField;

/// Captures canvas snapshots at a fixed step interval
///
/// Snapshots are taken after drawing, so the animation shows the canvas as
/// the thread accumulates rather than individual line choices.
pub struct VisualizationCapture {
    frames: Vec<RgbaImage>,
    frame_step: usize,
    last_captured_step: Option<usize>,
}

impl VisualizationCapture {
    /// Capture one frame every `frame_step` steps (at least every step)
    pub fn new(frame_step: usize) -> Self {
        Self {
            frames: Vec::new(),
            frame_step: frame_step.max(1),
            last_captured_step: None,
        }
    }

    /// Record the canvas after `step` if it falls on the capture interval
    pub fn observe(&mut self, step: usize, field: &IntensityField) {
        if step % self.frame_step == 0 {
            self.capture(step, field);
        }
    }

    /// Record the final canvas unless that step was already captured
    pub fn finish(&mut self, step: usize, field: &IntensityField) {
        if self.last_captured_step != Some(step) {
            self.capture(step, field);
        }
    }

    fn capture(&mut self, step: usize, field: &IntensityField) {
        self.frames.push(to_display_buffer(field));
        self.last_captured_step = Some(step);
    }

    /// Number of captured frames
    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// Export the captured frames as an animated GIF
    ///
    /// The final frame is held longer so the finished pattern stays visible.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No frames were captured
    /// - File system operations fail
    /// - GIF encoding fails
    pub fn export_gif(&self, output_path: &Path, frame_delay_ms: u32) -> Result<()> {
        if self.frames.is_empty() {
            return Err(invalid_source(&"No frames captured for visualization"));
        }

        let delay = Delay::from_numer_denom_ms(frame_delay_ms, 1);
        let mut frames: Vec<Frame> = self
            .frames
            .iter()
            .map(|image| Frame::from_parts(image.clone(), 0, 0, delay))
            .collect();

        // Final frame displays longer for better visibility
        if let Some(last) = self.frames.last() {
            frames.push(Frame::from_parts(
                last.clone(),
                0,
                0,
                Delay::from_numer_denom_ms(frame_delay_ms.saturating_mul(25), 1),
            ));
        }

        if let Some(parent) = output_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| ThreadError::FileSystem {
                path: parent.to_path_buf(),
                operation: "create directory",
                source: e,
            })?;
        }

        let file = std::fs::File::create(output_path).map_err(|e| ThreadError::FileSystem {
            path: output_path.to_path_buf(),
            operation: "create file",
            source: e,
        })?;

        let mut encoder = image::codecs::gif::GifEncoder::new(file);
        encoder
            .encode_frames(frames)
            .map_err(|e| ThreadError::ImageExport {
                path: output_path.to_path_buf(),
                source: e,
            })?;

        Ok(())
    }
}
