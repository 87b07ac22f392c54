//! rustylog is a small process-wide leveled logger.
//!
//! Records carry a nanosecond timestamp, one of seven severity levels and an
//! optional tag. They are filtered against a verbosity threshold and written
//! to stdout (colored per level) and/or a single log file.
//!
//! ```no_run
//! use rustylog::{log_error, log_info_tagged};
//!
//! rustylog::init_with_file("app.log", false, true)?;
//! log_info_tagged!("NET", "listening on port %d", 8080)?;
//! log_error!("lost %d packets", 3)?;
//! # Ok::<(), rustylog::log::log_error::LogError>(())
//! ```

use std::path::Path;

use crate::{
    config::LogConfig,
    log::{log_error::LogError, logger::Logger},
};

/// Configuration sources for the logger.
pub mod config;
/// Logging engine, levels, formatting and assertions.
pub mod log;

/// Initializes the global logger for console output only.
///
/// The threshold comes from `SCLOG_VERBOSITY_LEVEL` if set, else INFO.
pub fn init() {
    Logger::global().init(&LogConfig::from_env());
}

/// Opens `path` as the global log file, sets console output, then resolves
/// the threshold as [`init`] does.
///
/// # Errors
///
/// Fails if a log file is already open or `path` cannot be opened.
pub fn init_with_file<P: AsRef<Path>>(path: P, append: bool, to_stdout: bool) -> Result<(), LogError> {
    let logger = Logger::global();
    logger.set_output_file(path, append)?;
    logger.set_stdout_enabled(to_stdout);
    logger.init(&LogConfig::from_env());
    Ok(())
}

/// Applies a resolved [`LogConfig`] to `logger`.
///
/// # Errors
///
/// Fails if `config.log_file` is set and cannot be opened, or if a log file
/// is already open.
pub fn init_logger(logger: &Logger, config: &LogConfig) -> Result<(), LogError> {
    if let Some(path) = &config.log_file {
        logger.set_output_file(path, config.append)?;
    }
    logger.set_stdout_enabled(config.to_stdout);
    logger.init(config);
    Ok(())
}

/// [`init_logger`] on the global logger.
pub fn init_with_config(config: &LogConfig) -> Result<(), LogError> {
    init_logger(Logger::global(), config)
}
