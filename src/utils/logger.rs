//! Logger setup for the command-line front end
//!
//! The library only emits records through the `log` facade; the binary
//! installs `env_logger` here. `RUST_LOG` still overrides the chosen level.

use log::LevelFilter;

/// Initializes the global logger at the given level
///
/// Calling this twice keeps the first logger and prints a warning.
pub fn init_logging(level: LevelFilter) {
    let result = env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .try_init();

    if result.is_err() {
        // Logger was already set - this should not happen in normal usage
        eprintln!("Warning: Global logger was already initialized");
    }
}

/// Level used when `--verbose` is given
pub fn verbose_level(verbose: bool, configured: LevelFilter) -> LevelFilter {
    if verbose {
        LevelFilter::Debug
    } else {
        configured
    }
}
