//! File logging.
//!
//! Terminal hosts cannot log to stdout without corrupting the screen, so logs
//! go to a file through `simplelog`.

use std::fs::File;
use std::path::Path;

use simplelog::{Config, LevelFilter, WriteLogger};
use thiserror::Error;

/// Errors raised while installing the logger.
#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("failed to create log file: {0}")]
    Io(#[from] std::io::Error),

    /// A global logger is already installed.
    #[error("a logger is already initialized")]
    AlreadyInitialized,
}

/// Install a global logger writing to `path` at `level`.
pub fn init_file_logger(path: impl AsRef<Path>, level: LevelFilter) -> Result<(), LoggingError> {
    let file = File::create(path)?;
    WriteLogger::init(level, Config::default(), file).map_err(|_| LoggingError::AlreadyInitialized)
}
