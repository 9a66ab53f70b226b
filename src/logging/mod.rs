//! Tracing subscriber initialization.
//!
//! The engine is a library; hosts that want its `tracing` events on disk
//! call [`init`] once at startup. Logs go to a file so they can be
//! watched with `tail -f` without interleaving into the host's UI.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Error type for logging initialization failures.
#[derive(Debug, Error)]
pub enum LoggingError {
    /// Failed to create the log directory.
    #[error("failed to create log directory at {path:?}: {source}")]
    DirectoryCreation {
        /// The directory path that could not be created.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The log path has no usable filename component.
    #[error("invalid log file path: {0:?}")]
    InvalidPath(PathBuf),

    /// The log path has no parent directory.
    #[error("log path has no parent directory: {0:?}")]
    NoParentDirectory(PathBuf),

    /// A tracing subscriber was already installed.
    #[error("tracing subscriber already initialized")]
    SubscriberAlreadySet,
}

/// Initialize file-based tracing output.
///
/// Creates the log directory if needed and installs a subscriber writing
/// to `log_path`. Respects `RUST_LOG`, defaulting to "info".
///
/// # Errors
///
/// Returns [`LoggingError::SubscriberAlreadySet`] if a subscriber is
/// already installed, or a path/IO variant when the log location is
/// unusable.
pub fn init(log_path: &Path) -> Result<(), LoggingError> {
    use tracing_subscriber::EnvFilter;

    if let Some(parent) = log_path.parent() {
        std::fs::create_dir_all(parent).map_err(|source| LoggingError::DirectoryCreation {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    let file_name = log_path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| LoggingError::InvalidPath(log_path.to_path_buf()))?;

    let directory = log_path
        .parent()
        .ok_or_else(|| LoggingError::NoParentDirectory(log_path.to_path_buf()))?;

    let file_appender = tracing_appender::rolling::never(directory, file_name);

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(file_appender)
        .with_ansi(false) // No ANSI colors in log files
        .try_init()
        .map_err(|_| LoggingError::SubscriberAlreadySet)?;

    Ok(())
}
