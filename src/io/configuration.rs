//! Algorithm constants and runtime configuration defaults

// Algorithm-specific constants for candidate evaluation
/// Maximum candidates scored per step before random sampling kicks in
pub const CANDIDATE_SAMPLE_CAP: usize = 180;

/// Steps between progress reports and cancellation-friendly yields
pub const PROGRESS_INTERVAL: usize = 100;

/// Shrink factor keeping the usable frame interior inset from the canvas edge
pub const FRAME_INSET_RADIUS: f64 = 0.98;

// Bounds memory spent on memoized line traces (4 bytes per index)
/// Maximum number of pixel indices kept across all cached line traces
pub const LINE_CACHE_INDEX_BUDGET: usize = 16_000_000;

/// Largest canvas side whose flat pixel indices fit in a `u32`
pub const MAX_RESOLUTION: usize = 65_535;

// Default values for configurable parameters
/// Fixed seed for reproducible generation
pub const DEFAULT_SEED: u64 = 42;

/// Default number of pins around the frame
pub const DEFAULT_NUM_PINS: usize = 200;

/// Default number of thread lines to draw
pub const DEFAULT_NUM_LINES: usize = 2000;

/// Default minimum cyclic pin distance between line endpoints
pub const DEFAULT_MIN_PIN_GAP: usize = 20;

/// Default per-line darkening strength
pub const DEFAULT_ALPHA: f64 = 0.08;

/// Default canvas side length in pixels
pub const DEFAULT_RESOLUTION: usize = 600;

/// Default gamma applied to target luminance
pub const DEFAULT_GAMMA: f64 = 1.0;

/// Default start angle in degrees, clockwise from the top
pub const DEFAULT_START_ANGLE: f64 = 0.0;

/// Default 1-based pin where the thread starts
pub const DEFAULT_START_PIN: usize = 1;

/// Default ellipse height-to-width ratio
pub const DEFAULT_ELLIPSE_RATIO: f64 = 0.75;

/// Default rectangle width-to-height ratio
pub const DEFAULT_RECT_RATIO: f64 = 1.0;

// Output settings
/// Suffix added to output filenames
pub const OUTPUT_SUFFIX: &str = "_threads";
/// Suffix added to build-up animation filenames
pub const VISUALIZATION_SUFFIX: &str = "_build";
/// Image extensions accepted as generation targets
pub const SUPPORTED_EXTENSIONS: [&str; 5] = ["png", "jpg", "jpeg", "bmp", "webp"];
/// Steps between captured animation frames
pub const VISUALIZATION_FRAME_STEP: usize = 50;
/// Delay between GIF animation frames
pub const GIF_FRAME_DELAY_MS: u32 = 80;
