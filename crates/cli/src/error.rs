use std::path::PathBuf;
use std::time::Duration;

/// relens error types
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Configuration file not found or invalid
    #[error("config error: {message}")]
    Config {
        message: String,
        path: Option<PathBuf>,
    },

    /// Invalid command-line arguments
    #[error("argument error: {0}")]
    Argument(String),

    /// File I/O error
    #[error("io error: {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Evaluation did not finish before the deadline.
    #[error("evaluation timed out after {}ms", .0.as_millis())]
    Timeout(Duration),

    /// Internal error (bug)
    #[error("internal error: {0}")]
    Internal(String),
}

/// Result type using relens Error
pub type Result<T> = std::result::Result<T, Error>;

/// Process exit codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Evaluation succeeded (zero matches included)
    Success = 0,
    /// Pattern or request was invalid
    InvalidPattern = 1,
    /// Configuration or argument error
    ConfigError = 2,
    /// Internal error or timeout
    InternalError = 3,
}

impl From<&Error> for ExitCode {
    fn from(err: &Error) -> Self {
        match err {
            Error::Config { .. } | Error::Argument(_) => ExitCode::ConfigError,
            Error::Io { .. } => ExitCode::InternalError,
            Error::Timeout(_) => ExitCode::InternalError,
            Error::Internal(_) => ExitCode::InternalError,
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
