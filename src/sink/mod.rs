//! Per-link sinks at the end of the pipeline.
//!
//! Provides:
//! - Archive downloading into a directory
//! - Link recording into an append-only file

pub mod archive;
pub mod record;

pub use archive::ArchiveDownloader;
pub use record::LinkRecorder;

use async_trait::async_trait;

use crate::error::Result;

/// Consumer of filtered links.
///
/// Links are handed over one at a time, in page order; `finish` is called
/// exactly once after the last link, whether the batch succeeded or not.
#[async_trait]
pub trait LinkSink: Send {
    /// Short label used in console output.
    fn label(&self) -> &'static str;

    /// Handle one link, returning the number of bytes written locally.
    async fn accept(&mut self, link: &str) -> Result<u64>;

    /// Flush and release any held resources.
    async fn finish(&mut self) -> Result<()>;
}
