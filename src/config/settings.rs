//! Run settings.

use std::path::PathBuf;
use std::time::Duration;

use crate::config::modes::{FailurePolicy, RunMode};
use crate::links::CategoryFlags;

/// Everything a single run needs, assembled from the command line.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Webpage listing the archives.
    pub source_url: String,

    /// Output directory (download mode) or record file (record mode).
    pub output: PathBuf,

    /// Download or record.
    pub mode: RunMode,

    /// Enabled archive categories.
    pub categories: CategoryFlags,

    /// Whether one failed link stops the batch.
    pub failure_policy: FailurePolicy,

    /// Per-request timeout; `None` waits indefinitely.
    pub timeout: Option<Duration>,

    /// User agent sent with every request.
    pub user_agent: String,

    /// Whether to print per-link lines and progress bars.
    pub show_progress: bool,
}

impl Settings {
    /// Create settings for a mode with that mode's default categories.
    pub fn new(source_url: impl Into<String>, output: impl Into<PathBuf>, mode: RunMode) -> Self {
        Self {
            source_url: source_url.into(),
            output: output.into(),
            mode,
            categories: mode.default_categories(),
            failure_policy: FailurePolicy::default(),
            timeout: None,
            user_agent: default_user_agent(),
            show_progress: true,
        }
    }
}

/// User agent identifying this tool.
pub fn default_user_agent() -> String {
    format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
}
