/// Command-line parsing and batch file processing
pub mod cli;
/// Conversion of intensity fields into displayable images
pub mod compositor;
/// Tunable constants and command-line defaults
pub mod configuration;
/// Error types shared across the crate
pub mod error;
/// Connection table serialization
pub mod export;
/// Logger setup for the binary
pub mod logging;
/// Terminal progress bars for batch runs
pub mod progress;
/// Animated build-up capture
pub mod visualization;
