use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use log::{debug, info};
use rand::Rng;
use serde::Serialize;

use crate::{
    algorithm::cache::{CacheStats, LineCache},
    algorithm::candidates::{candidate_pins, sample_candidates},
    algorithm::scoring::{ScoredCandidate, darkening_factor, line_improvement, select_best},
    geometry::pins::Point,
    io::configuration::{
        CANDIDATE_SAMPLE_CAP, LINE_CACHE_INDEX_BUDGET, MAX_RESOLUTION, PROGRESS_INTERVAL,
    },
    io::error::{Result, invalid_parameter, invalid_source},
    raster::field::IntensityField,
    raster::line::{PixelIndex, trace_pixels},
};

// Caps the up-front connection allocation for very large line counts
const MAX_PREALLOCATED_LINES: usize = 100_000;

/// Parameters controlling line selection for one generation run
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GenerationConfig {
    /// Number of lines to draw
    pub num_lines: usize,
    /// 1-based pin the thread starts at, clamped into range
    pub start_pin: usize,
    /// Minimum cyclic pin distance between the two ends of a line
    pub min_pin_gap: usize,
    /// Per-line darkening strength, `f = clamp(1 - alpha, 0, 1)`
    pub alpha: f64,
    /// Canvas side length in pixels
    pub resolution: usize,
}

impl GenerationConfig {
    /// Reject configurations that cannot run
    ///
    /// Out-of-range but finite `alpha` values are honored as given.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ThreadError::InvalidParameter`] if the resolution is
    /// zero or `alpha` is not finite
    pub fn validate(&self) -> Result<()> {
        if self.resolution == 0 {
            return Err(invalid_parameter(
                "resolution",
                &self.resolution,
                &"canvas resolution must be positive",
            ));
        }
        if self.resolution > MAX_RESOLUTION {
            return Err(invalid_parameter(
                "resolution",
                &self.resolution,
                &format!("canvas resolution must not exceed {MAX_RESOLUTION}"),
            ));
        }
        if !self.alpha.is_finite() {
            return Err(invalid_parameter("alpha", &self.alpha, &"must be finite"));
        }
        Ok(())
    }

    /// Darkening multiplier derived from `alpha`
    pub fn darkening_factor(&self) -> f64 {
        darkening_factor(self.alpha)
    }
}

/// One thread segment in the winding order
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Connection {
    /// Sequential step number starting at 1
    pub step: usize,
    /// 1-based pin the segment starts at
    pub start_pin: usize,
    /// 1-based pin the segment ends at
    pub end_pin: usize,
}

/// Lifecycle of a generation run
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GenerationState {
    /// No step executed yet
    Idle,
    /// At least one step executed, more may follow
    Running,
    /// All requested lines drawn, or no candidate pins remained
    Completed,
    /// Stopped early on request
    Cancelled,
}

impl GenerationState {
    /// Whether no further steps will run
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Completed | Self::Cancelled)
    }
}

/// Result of a single [`PatternGenerator::execute_step`] call
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum StepOutcome {
    /// A connection was appended
    Connected {
        /// The recorded connection
        connection: Connection,
        /// Error reduction of the chosen line
        improvement: f64,
        /// Whether the line darkened the canvas
        applied: bool,
    },
    /// The run is in the given terminal state
    Finished(GenerationState),
}

/// Everything a finished or cancelled run produced
#[derive(Clone, Debug)]
pub struct GenerationOutcome {
    /// Terminal state, `Completed` or `Cancelled`
    pub state: GenerationState,
    /// Connections in winding order
    pub connections: Vec<Connection>,
    /// Final canvas intensities
    pub field: IntensityField,
}

impl GenerationOutcome {
    /// Whether the run stopped on a cancellation request
    pub fn is_cancelled(&self) -> bool {
        self.state == GenerationState::Cancelled
    }
}

/// Shared flag another party can set to stop a run between steps
#[derive(Clone, Debug, Default)]
pub struct CancellationToken {
    flag: Arc<AtomicBool>,
}

impl CancellationToken {
    /// Create a token that is not yet cancelled
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation
    pub fn cancel(&self) {
        self.flag.store(true, Ordering::Relaxed);
    }

    /// Whether cancellation was requested
    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::Relaxed)
    }
}

/// Receives coarse progress reports during [`generate`]
pub trait ProgressObserver {
    /// Called with the number of completed steps and the requested total
    fn on_progress(&mut self, step: usize, total: usize);
}

impl<F> ProgressObserver for F
where
    F: FnMut(usize, usize),
{
    fn on_progress(&mut self, step: usize, total: usize) {
        self(step, total);
    }
}

/// Greedy error-minimizing thread path builder
///
/// Each step scores the lines from the current pin to every eligible pin by
/// how much they would reduce the squared error against the target, draws the
/// best one, and moves to its far end.
pub struct PatternGenerator<'a, R> {
    target: &'a IntensityField,
    pins: &'a [Point],
    config: GenerationConfig,
    factor: f64,
    rng: R,
    current: IntensityField,
    connections: Vec<Connection>,
    current_pin: usize,
    state: GenerationState,
    line_cache: LineCache,
    sample_cap: usize,
}

impl<'a, R: Rng> PatternGenerator<'a, R> {
    /// Create a generator over a target field and pixel-space pins
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - the configuration is invalid
    /// - the target resolution differs from `config.resolution`
    /// - fewer than two pins are supplied
    pub fn new(
        target: &'a IntensityField,
        pins: &'a [Point],
        config: GenerationConfig,
        rng: R,
    ) -> Result<Self> {
        config.validate()?;

        if target.resolution() != config.resolution {
            return Err(invalid_source(&format!(
                "target resolution {} does not match configured resolution {}",
                target.resolution(),
                config.resolution
            )));
        }

        if pins.len() < 2 {
            return Err(invalid_parameter(
                "num_pins",
                &pins.len(),
                &"at least two pins are required",
            ));
        }

        let current_pin = config.start_pin.clamp(1, pins.len()) - 1;

        Ok(Self {
            target,
            pins,
            config,
            factor: config.darkening_factor(),
            rng,
            current: IntensityField::blank(config.resolution),
            connections: Vec::with_capacity(config.num_lines.min(MAX_PREALLOCATED_LINES)),
            current_pin,
            state: GenerationState::Idle,
            line_cache: LineCache::new(LINE_CACHE_INDEX_BUDGET),
            sample_cap: CANDIDATE_SAMPLE_CAP,
        })
    }

    /// Override how many candidates are scored per step before sampling
    #[must_use]
    pub fn with_sample_cap(mut self, sample_cap: usize) -> Self {
        self.sample_cap = sample_cap;
        self
    }

    /// Override how many pixel indices the line cache may hold in total
    #[must_use]
    pub fn with_line_cache_budget(mut self, index_budget: usize) -> Self {
        self.line_cache = LineCache::new(index_budget);
        self
    }

    /// Current lifecycle state
    pub const fn state(&self) -> GenerationState {
        self.state
    }

    /// Connections recorded so far
    pub fn connections(&self) -> &[Connection] {
        &self.connections
    }

    /// Canvas intensities after the lines drawn so far
    pub const fn current_field(&self) -> &IntensityField {
        &self.current
    }

    /// 1-based pin the next line starts from
    pub const fn current_pin(&self) -> usize {
        self.current_pin + 1
    }

    /// Line cache hit/miss counters
    pub const fn line_cache_stats(&self) -> CacheStats {
        self.line_cache.stats
    }

    /// Stop the run; later steps report `Cancelled`
    ///
    /// Has no effect once the run has completed.
    pub fn cancel(&mut self) {
        if !self.state.is_terminal() {
            info!(
                "Generation cancelled after {} of {} lines",
                self.connections.len(),
                self.config.num_lines
            );
            self.state = GenerationState::Cancelled;
        }
    }

    /// Run one selection step
    ///
    /// Records a connection even when the best line would not reduce the
    /// error, so the thread path stays continuous; the canvas is only
    /// darkened for lines with positive improvement.
    pub fn execute_step(&mut self) -> StepOutcome {
        if self.state.is_terminal() {
            return StepOutcome::Finished(self.state);
        }
        self.state = GenerationState::Running;

        if self.connections.len() >= self.config.num_lines {
            self.state = GenerationState::Completed;
            return StepOutcome::Finished(self.state);
        }

        let num_pins = self.pins.len();
        let candidates = candidate_pins(self.current_pin, num_pins, self.config.min_pin_gap);
        if candidates.is_empty() {
            debug!(
                "No candidate pins from pin {} with minimum gap {}; stopping after {} lines",
                self.current_pin + 1,
                self.config.min_pin_gap,
                self.connections.len()
            );
            self.state = GenerationState::Completed;
            return StepOutcome::Finished(self.state);
        }

        let sampled = sample_candidates(candidates, self.sample_cap, &mut self.rng);
        let Some(best) = select_best(sampled.iter().map(|&pin| ScoredCandidate {
            pin,
            improvement: self.score_line(pin),
        })) else {
            self.state = GenerationState::Completed;
            return StepOutcome::Finished(self.state);
        };

        let applied = best.improvement > 0.0;
        if applied {
            let (from, to) = (self.current_pin, best.pin);
            let pins = self.pins;
            let resolution = self.config.resolution;
            let pixels = self
                .line_cache
                .get_or_trace(from, to, || trace_between(pins, from, to, resolution));
            self.current.darken(&pixels, self.factor);
        }

        let connection = Connection {
            step: self.connections.len() + 1,
            start_pin: self.current_pin + 1,
            end_pin: best.pin + 1,
        };
        self.connections.push(connection);
        self.current_pin = best.pin;

        if self.connections.len() >= self.config.num_lines {
            self.state = GenerationState::Completed;
        }

        StepOutcome::Connected {
            connection,
            improvement: best.improvement,
            applied,
        }
    }

    /// Drive the run to a terminal state
    ///
    /// Checks `token` before every step and reports progress every
    /// `interval` steps. A completed run always ends with a report of the
    /// lines actually drawn, even when it stopped early for lack of
    /// candidates.
    pub fn run<P>(&mut self, observer: &mut P, token: &CancellationToken, interval: usize)
    where
        P: ProgressObserver + ?Sized,
    {
        let interval = interval.max(1);
        let total = self.config.num_lines;

        info!(
            "Generating {total} lines over {} pins at {}px",
            self.pins.len(),
            self.config.resolution
        );

        let mut last_reported = None;

        while !self.state.is_terminal() {
            if token.is_cancelled() {
                self.cancel();
                break;
            }

            if let StepOutcome::Connected { connection, .. } = self.execute_step() {
                if connection.step % interval == 0 || connection.step == total {
                    observer.on_progress(connection.step, total);
                    last_reported = Some(connection.step);
                }
            }
        }

        let drawn = self.connections.len();
        if self.state == GenerationState::Completed && last_reported != Some(drawn) {
            observer.on_progress(drawn, total);
        }

        let stats = self.line_cache.stats;
        debug!(
            "Line cache: {} hits, {} misses, {} lines holding {} indices",
            stats.hits,
            stats.misses,
            self.line_cache.len(),
            self.line_cache.stored_indices()
        );
    }

    /// Consume the generator, returning its connections and canvas
    pub fn into_outcome(self) -> GenerationOutcome {
        GenerationOutcome {
            state: self.state,
            connections: self.connections,
            field: self.current,
        }
    }

    fn score_line(&mut self, to: usize) -> f64 {
        let from = self.current_pin;
        let pins = self.pins;
        let resolution = self.config.resolution;
        let pixels = self.line_cache.get_or_trace(from, to, || {
            trace_between(pins, from, to, resolution)
        });
        line_improvement(
            self.current.as_slice(),
            self.target.as_slice(),
            &pixels,
            self.factor,
        )
    }
}

fn trace_between(pins: &[Point], from: usize, to: usize, resolution: usize) -> Vec<PixelIndex> {
    match (pins.get(from), pins.get(to)) {
        (Some(&start), Some(&end)) => trace_pixels(start, end, resolution),
        _ => Vec::new(),
    }
}

/// Run a complete generation and return its connections and canvas
///
/// Progress is reported every [`PROGRESS_INTERVAL`] steps. Cancellation via
/// `token` takes effect at the next step boundary; the outcome then carries
/// the connections drawn so far and a `Cancelled` state.
///
/// # Errors
///
/// Returns an error if the generator cannot be constructed (see
/// [`PatternGenerator::new`])
pub fn generate<R, P>(
    target: &IntensityField,
    pins: &[Point],
    config: GenerationConfig,
    rng: R,
    observer: &mut P,
    token: &CancellationToken,
) -> Result<GenerationOutcome>
where
    R: Rng,
    P: ProgressObserver + ?Sized,
{
    let mut generator = PatternGenerator::new(target, pins, config, rng)?;
    generator.run(observer, token, PROGRESS_INTERVAL);
    Ok(generator.into_outcome())
}
