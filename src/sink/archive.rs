//! Streaming archive downloads.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use futures::StreamExt;
use tokio::fs::File;
use tokio::io::AsyncWriteExt;

use crate::error::{Error, Result};
use crate::fs::{destination_path, ensure_dir, local_filename};
use crate::http::PageClient;
use crate::output::create_download_bar;
use crate::sink::LinkSink;

/// Minimum file size to show progress bar (20 MB).
const PROGRESS_THRESHOLD: u64 = 20 * 1024 * 1024;

/// Downloads each link into `output_dir`, named after its final path segment.
pub struct ArchiveDownloader {
    client: PageClient,
    output_dir: PathBuf,
    show_progress: bool,
    // Filenames written during this batch.
    written: HashSet<String>,
}

impl ArchiveDownloader {
    /// Create a downloader, creating the output directory if it is missing.
    pub async fn create(
        client: PageClient,
        output_dir: impl Into<PathBuf>,
        show_progress: bool,
    ) -> Result<Self> {
        let output_dir = output_dir.into();
        ensure_dir(&output_dir).await?;

        Ok(Self {
            client,
            output_dir,
            show_progress,
            written: HashSet::new(),
        })
    }

    /// Stream `link` to `output_path`, truncating any existing file.
    ///
    /// The destination is only touched once the server has answered with a
    /// success status; a transfer that breaks after that removes the file.
    async fn download_direct(&self, link: &str, output_path: &Path) -> Result<u64> {
        let response = self.client.download_file(link).await?;

        let content_length = response.content_length();
        let progress = if self.show_progress
            && content_length.map(|l| l > PROGRESS_THRESHOLD).unwrap_or(false)
        {
            Some(create_download_bar(content_length.unwrap_or(0)))
        } else {
            None
        };

        let mut file = File::create(output_path)
            .await
            .map_err(|e| Error::write(output_path, e))?;
        let mut stream = response.bytes_stream();
        let mut downloaded: u64 = 0;

        let copied: Result<()> = async {
            while let Some(chunk) = stream.next().await {
                let chunk = chunk.map_err(|e| Error::download(link, e))?;
                file.write_all(&chunk)
                    .await
                    .map_err(|e| Error::write(output_path, e))?;
                downloaded += chunk.len() as u64;

                if let Some(ref pb) = progress {
                    pb.set_position(downloaded);
                }
            }

            file.flush()
                .await
                .map_err(|e| Error::write(output_path, e))
        }
        .await;

        if let Some(pb) = progress {
            pb.finish_and_clear();
        }

        if let Err(e) = copied {
            drop(file);
            // Drop the truncated archive.
            if let Err(remove_err) = tokio::fs::remove_file(output_path).await {
                tracing::debug!(
                    "Could not remove partial file {}: {}",
                    output_path.display(),
                    remove_err
                );
            }
            return Err(e);
        }

        Ok(downloaded)
    }
}

#[async_trait]
impl LinkSink for ArchiveDownloader {
    fn label(&self) -> &'static str {
        "Downloaded"
    }

    async fn accept(&mut self, link: &str) -> Result<u64> {
        let output_path = destination_path(&self.output_dir, link);
        tracing::debug!("Downloading {} -> {}", link, output_path.display());

        let filename = local_filename(link);
        if self.written.contains(filename) {
            tracing::warn!(
                "{} was already downloaded in this run; {} overwrites it",
                filename,
                link
            );
        }

        let bytes = self.download_direct(link, &output_path).await?;
        tracing::debug!("Wrote {} bytes to {}", bytes, output_path.display());
        self.written.insert(filename.to_string());

        Ok(bytes)
    }

    async fn finish(&mut self) -> Result<()> {
        Ok(())
    }
}
