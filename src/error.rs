//! Error types for the wdc-table-downloader application.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the application.
#[derive(Error, Debug)]
pub enum Error {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid configuration value for '{field}': {message}")]
    ConfigValidation { field: String, message: String },

    // Page errors
    #[error("Fetch error for {url}: {message}")]
    Fetch { url: String, message: String },

    #[error("Parse error: {0}")]
    Parse(String),

    // Per-link errors
    #[error("Download error for {url}: {message}")]
    Download { url: String, message: String },

    #[error("Write error for {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Request timed out: {url}")]
    Timeout { url: String },

    // Batch errors
    #[error("{failed} of {attempted} link(s) failed")]
    BatchFailed { failed: usize, attempted: usize },
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Build a `Write` error for a local path.
    pub fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Write {
            path: path.into(),
            source,
        }
    }

    /// Map a reqwest error raised while retrieving the source page.
    pub fn fetch(url: &str, err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Error::Timeout {
                url: url.to_string(),
            }
        } else {
            Error::Fetch {
                url: url.to_string(),
                message: err.to_string(),
            }
        }
    }

    /// Map a reqwest error raised while transferring an archive.
    pub fn download(url: &str, err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Error::Timeout {
                url: url.to_string(),
            }
        } else {
            Error::Download {
                url: url.to_string(),
                message: err.to_string(),
            }
        }
    }

    /// Whether a per-link failure must stop the remaining batch
    /// irrespective of the configured failure policy.
    pub fn aborts_batch(&self) -> bool {
        matches!(self, Error::Timeout { .. })
    }

    /// Process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::Config(_) | Error::ConfigValidation { .. } => exit_codes::CONFIG_ERROR,
            Error::Fetch { .. } | Error::Parse(_) => exit_codes::FETCH_ERROR,
            Error::Download { .. }
            | Error::Write { .. }
            | Error::Timeout { .. }
            | Error::BatchFailed { .. } => exit_codes::DOWNLOAD_ERROR,
        }
    }
}

/// Process exit codes.
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const FETCH_ERROR: i32 = 2;
    pub const CONFIG_ERROR: i32 = 3;
    pub const DOWNLOAD_ERROR: i32 = 4;
}
