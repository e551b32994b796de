//! Run statistics.

use crate::error::{Error, Result};

/// A link that could not be handled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkFailure {
    pub url: String,
    pub message: String,
}

/// Counters for one pipeline run.
#[derive(Debug, Default)]
pub struct RunStats {
    pub page_url: String,

    /// Anchors found on the page.
    pub links_found: usize,
    /// Links that passed the category filter.
    pub matched: usize,
    /// Links the sink handled successfully.
    pub succeeded: usize,
    /// Bytes written locally.
    pub bytes_written: u64,

    pub failures: Vec<LinkFailure>,

    /// Error that ended the batch before every matching link was handled.
    pub aborted: Option<Error>,
}

impl RunStats {
    /// Create empty statistics for a page.
    pub fn new(page_url: impl Into<String>) -> Self {
        Self {
            page_url: page_url.into(),
            ..Default::default()
        }
    }

    /// Count a link that passed the filter.
    pub fn increment_matched(&mut self) {
        self.matched += 1;
    }

    /// Count a successfully handled link.
    pub fn record_success(&mut self, bytes: u64) {
        self.succeeded += 1;
        self.bytes_written += bytes;
    }

    /// Remember a failed link.
    pub fn record_failure(&mut self, url: &str, error: &Error) {
        self.failures.push(LinkFailure {
            url: url.to_string(),
            message: error.to_string(),
        });
    }

    /// Number of failed links.
    pub fn failed(&self) -> usize {
        self.failures.len()
    }

    /// Stop the batch on `error`.
    pub fn abort(&mut self, error: Error) {
        self.aborted = Some(error);
    }

    /// Whether the batch stopped early.
    pub fn is_aborted(&self) -> bool {
        self.aborted.is_some()
    }

    /// Surface the abort error, or `Error::BatchFailed` when links failed.
    pub fn ensure_complete(self) -> Result<Self> {
        if let Some(error) = self.aborted {
            return Err(error);
        }
        if self.failures.is_empty() {
            Ok(self)
        } else {
            Err(Error::BatchFailed {
                failed: self.failed(),
                attempted: self.matched,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters() {
        let mut stats = RunStats::new("https://x/");
        stats.links_found = 4;
        stats.increment_matched();
        stats.increment_matched();
        stats.record_success(10);
        stats.record_failure(
            "https://x/b_rest.zip",
            &Error::Download {
                url: "https://x/b_rest.zip".into(),
                message: "HTTP 404 Not Found".into(),
            },
        );

        assert_eq!(stats.succeeded, 1);
        assert_eq!(stats.bytes_written, 10);
        assert_eq!(stats.failed(), 1);
        assert_eq!(stats.failures[0].url, "https://x/b_rest.zip");
    }

    #[test]
    fn test_ensure_complete() {
        let stats = RunStats::new("https://x/");
        assert!(stats.ensure_complete().is_ok());

        let mut stats = RunStats::new("https://x/");
        stats.increment_matched();
        stats.record_failure("https://x/a_top100.zip", &Error::Parse("x".into()));
        match stats.ensure_complete() {
            Err(Error::BatchFailed { failed, attempted }) => {
                assert_eq!(failed, 1);
                assert_eq!(attempted, 1);
            }
            other => panic!("expected batch failure, got {:?}", other),
        }
    }

    #[test]
    fn test_abort_takes_precedence() {
        let mut stats = RunStats::new("https://x/");
        stats.increment_matched();
        let err = Error::Timeout {
            url: "https://x/a_top100.zip".into(),
        };
        stats.record_failure("https://x/a_top100.zip", &err);
        stats.abort(err);

        assert!(stats.is_aborted());
        assert!(matches!(
            stats.ensure_complete(),
            Err(Error::Timeout { .. })
        ));
    }
}
