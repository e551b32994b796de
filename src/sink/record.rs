//! Append-only link recording.

use std::path::PathBuf;

use async_trait::async_trait;
use tokio::fs::{File, OpenOptions};
use tokio::io::AsyncWriteExt;

use crate::error::{Error, Result};
use crate::sink::LinkSink;

/// Appends each link as one line to a file.
///
/// The file is opened once and shared by the whole batch. Lines accumulate
/// across runs; nothing is truncated or deduplicated.
pub struct LinkRecorder {
    path: PathBuf,
    file: File,
}

impl LinkRecorder {
    /// Open `path` for appending, creating it if it does not exist.
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .await
            .map_err(|e| Error::write(&path, e))?;

        Ok(Self { path, file })
    }
}

#[async_trait]
impl LinkSink for LinkRecorder {
    fn label(&self) -> &'static str {
        "Recorded"
    }

    async fn accept(&mut self, link: &str) -> Result<u64> {
        let line = format!("{}\n", link);
        self.file
            .write_all(line.as_bytes())
            .await
            .map_err(|e| Error::write(&self.path, e))?;
        // Each line is on disk before the next link is handled.
        self.file
            .flush()
            .await
            .map_err(|e| Error::write(&self.path, e))?;

        tracing::debug!("Recorded {} in {}", link, self.path.display());
        Ok(line.len() as u64)
    }

    async fn finish(&mut self) -> Result<()> {
        self.file
            .sync_all()
            .await
            .map_err(|e| Error::write(&self.path, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_record_appends_lines_in_order() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("links.txt");

        let mut recorder = LinkRecorder::open(&path).await.unwrap();
        recorder.accept("https://x/a_minimum3.zip").await.unwrap();
        recorder.accept("https://x/b_minimum3.zip").await.unwrap();
        recorder.finish().await.unwrap();
        drop(recorder);

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, "https://x/a_minimum3.zip\nhttps://x/b_minimum3.zip\n");
    }

    #[tokio::test]
    async fn test_record_keeps_existing_content() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("links.txt");
        std::fs::write(&path, "https://y/old_rest.zip\n").unwrap();

        let mut recorder = LinkRecorder::open(&path).await.unwrap();
        recorder.accept("https://x/new_rest.zip").await.unwrap();
        recorder.finish().await.unwrap();
        drop(recorder);

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, "https://y/old_rest.zip\nhttps://x/new_rest.zip\n");
    }

    #[tokio::test]
    async fn test_open_missing_parent_is_write_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("no_such_dir").join("links.txt");

        let err = LinkRecorder::open(&path).await.err().unwrap();
        assert!(matches!(err, Error::Write { .. }));
    }
}
