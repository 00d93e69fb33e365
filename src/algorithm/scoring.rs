use crate::raster::line::PixelIndex;

/// Multiplier applied to a pixel each time a thread crosses it
///
/// Clamped to `[0, 1]` so extreme `alpha` values degrade to "no darkening"
/// or "full blackout" instead of leaving the valid intensity range.
pub fn darkening_factor(alpha: f64) -> f64 {
    (1.0 - alpha).clamp(0.0, 1.0)
}

/// Reduction in summed squared error if a line over `pixels` were drawn
///
/// Positive values mean the line moves the canvas closer to the target.
/// Indices missing from either buffer count as blank.
pub fn line_improvement(
    current: &[f64],
    target: &[f64],
    pixels: &[PixelIndex],
    factor: f64,
) -> f64 {
    pixels
        .iter()
        .map(|&index| {
            let index = index as usize;
            let now = current.get(index).copied().unwrap_or(1.0);
            let goal = target.get(index).copied().unwrap_or(1.0);
            let before = now - goal;
            let after = now.mul_add(factor, -goal);
            before.mul_add(before, -(after * after))
        })
        .sum()
}

/// A candidate pin together with its score
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredCandidate {
    /// 0-based pin slot
    pub pin: usize,
    /// Error reduction the line to this pin would achieve
    pub improvement: f64,
}

/// Pick the highest-scoring candidate, keeping the first one on ties
pub fn select_best<I>(scored: I) -> Option<ScoredCandidate>
where
    I: IntoIterator<Item = ScoredCandidate>,
{
    let mut best: Option<ScoredCandidate> = None;
    for candidate in scored {
        match best {
            Some(current) if candidate.improvement <= current.improvement => {}
            _ => best = Some(candidate),
        }
    }
    best
}
