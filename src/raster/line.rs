//! Pixel traces for straight thread segments

use crate::geometry::pins::Point;

/// Flat `row * resolution + col` index of a canvas pixel
pub type PixelIndex = u32;

/// Collect the flat pixel indices a segment from `start` to `end` passes through
///
/// The segment is sampled at `steps + 1` evenly spaced points where
/// `steps = max(2, ceil(max(|dx|, |dy|)))`, and each sample is rounded to the
/// nearest pixel with halves rounding up. Samples outside the canvas are
/// dropped, as are pixels whose index does not fit a [`PixelIndex`]. Repeated
/// indices are kept, so a pixel hit twice is weighted twice.
pub fn trace_pixels(start: Point, end: Point, resolution: usize) -> Vec<PixelIndex> {
    let dx = end.x - start.x;
    let dy = end.y - start.y;
    let longest = dx.abs().max(dy.abs()).ceil();
    let steps = if longest.is_finite() && longest > 2.0 {
        longest as usize
    } else {
        2
    };

    let limit = resolution as f64;
    let mut pixels = Vec::with_capacity(steps + 1);

    for step in 0..=steps {
        let t = step as f64 / steps as f64;
        let x = dx.mul_add(t, start.x + 0.5).floor();
        let y = dy.mul_add(t, start.y + 0.5).floor();

        if x >= 0.0 && y >= 0.0 && x < limit && y < limit {
            if let Ok(index) = PixelIndex::try_from(y as usize * resolution + x as usize) {
                pixels.push(index);
            }
        }
    }

    pixels
}
