//! Run mode definitions.

use std::fmt;

use crate::links::CategoryFlags;

/// What happens to each matching link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunMode {
    /// Append matching links to a file (default).
    #[default]
    Record,
    /// Stream matching archives into a directory.
    Download,
}

impl RunMode {
    /// Category selection used when none is given explicitly.
    pub fn default_categories(&self) -> CategoryFlags {
        match self {
            RunMode::Record => CategoryFlags {
                top100: false,
                minimum3: true,
                rest: false,
            },
            RunMode::Download => CategoryFlags {
                top100: true,
                minimum3: false,
                rest: false,
            },
        }
    }
}

impl fmt::Display for RunMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunMode::Record => write!(f, "record"),
            RunMode::Download => write!(f, "download"),
        }
    }
}

/// How a per-link failure affects the rest of the batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailurePolicy {
    /// Report the failure and continue with the next link.
    #[default]
    SkipAndLog,
    /// Stop at the first failure.
    FailFast,
}

impl fmt::Display for FailurePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailurePolicy::SkipAndLog => write!(f, "skip and log"),
            FailurePolicy::FailFast => write!(f, "fail fast"),
        }
    }
}
