use std::borrow::Cow;
use std::collections::HashMap;
use std::collections::hash_map::Entry;

use crate::raster::line::PixelIndex;

/// Memoization cache for traced pin-to-pin lines
///
/// Lines are keyed by the ordered pair of 0-based pin slots, since a trace
/// from `a` to `b` may round differently than one from `b` to `a`. Storage is
/// bounded by the total number of pixel indices held, so the footprint stays
/// the same whatever the canvas resolution. A trace that would exceed the
/// budget is computed and handed out but not kept.
pub struct LineCache {
    /// Pin pair to traced pixel indices
    lines: HashMap<(usize, usize), Vec<PixelIndex>>,

    /// Maximum number of pixel indices across all stored lines
    index_budget: usize,

    /// Pixel indices currently stored
    stored: usize,

    /// Cache performance statistics
    pub stats: CacheStats,
}

/// Performance metrics for cache effectiveness
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheStats {
    /// Number of cache hits
    pub hits: usize,
    /// Number of cache misses
    pub misses: usize,
}

impl LineCache {
    /// Create an empty cache holding at most `index_budget` pixel indices
    pub fn new(index_budget: usize) -> Self {
        Self {
            lines: HashMap::new(),
            index_budget,
            stored: 0,
            stats: CacheStats::default(),
        }
    }

    /// Number of stored lines
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether no lines are stored
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Total pixel indices held by the stored lines
    pub const fn stored_indices(&self) -> usize {
        self.stored
    }

    /// Retrieve the cached trace or compute it with `trace_fn`
    pub fn get_or_trace<F>(&mut self, from: usize, to: usize, trace_fn: F) -> Cow<'_, [PixelIndex]>
    where
        F: FnOnce() -> Vec<PixelIndex>,
    {
        match self.lines.entry((from, to)) {
            Entry::Occupied(entry) => {
                self.stats.hits += 1;
                Cow::Borrowed(entry.into_mut().as_slice())
            }
            Entry::Vacant(entry) => {
                self.stats.misses += 1;
                let trace = trace_fn();
                if self.stored + trace.len() > self.index_budget {
                    Cow::Owned(trace)
                } else {
                    self.stored += trace.len();
                    Cow::Borrowed(entry.insert(trace).as_slice())
                }
            }
        }
    }
}
