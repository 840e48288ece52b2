//! Logger setup for the console.

use log::LevelFilter;

use super::config::AppConfig;

/// Installs the global logger described by `config`.
///
/// `verbosity` raises the level: 0 info, 1 debug, 2+ trace.
pub(crate) fn initialize(config: &AppConfig, verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::Info,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    speed_logging::initialize(config.log_destination(), level, &config.log_file);
}
