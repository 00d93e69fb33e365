//! Logger initialisation for the command-line tool

use log::LevelFilter;

/// Initialize logging once for the process
///
/// Respects `RUST_LOG` when set, otherwise falls back to `default_filter`.
/// Calling this again after a logger is installed does nothing.
pub fn init_logging(default_filter: LevelFilter) {
    let mut builder = env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(default_filter.as_str()),
    );
    builder.format_timestamp(None);

    if builder.try_init().is_err() {
        // Logger already initialized; nothing to do.
    }
}

/// Default log level for the given verbosity flags
pub const fn default_level(verbose: bool, quiet: bool) -> LevelFilter {
    if quiet {
        LevelFilter::Error
    } else if verbose {
        LevelFilter::Info
    } else {
        LevelFilter::Warn
    }
}
