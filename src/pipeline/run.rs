//! The fetch → filter → sink pipeline.

use std::path::Path;

use crate::config::{FailurePolicy, RunMode, Settings};
use crate::error::Result;
use crate::http::PageClient;
use crate::links::{fetch_page_links, filter_links, CategoryFlags};
use crate::pipeline::state::RunStats;
use crate::sink::{ArchiveDownloader, LinkRecorder, LinkSink};

/// Per-batch behaviour shared by both sinks.
#[derive(Debug, Clone, Copy)]
pub struct BatchOptions {
    pub failure_policy: FailurePolicy,
    pub show_progress: bool,
}

impl Default for BatchOptions {
    fn default() -> Self {
        Self {
            failure_policy: FailurePolicy::default(),
            show_progress: true,
        }
    }
}

/// Fetch `page_url`, filter its links by `categories` and feed each match to `sink`.
///
/// Page errors are returned immediately. Per-link errors are recorded in the
/// returned statistics and, under `FailFast` or for timeouts, end the batch
/// with the error kept in `RunStats::aborted`. `sink.finish()` runs on every
/// path once the page has been fetched.
pub async fn run_pipeline<S>(
    client: &PageClient,
    page_url: &str,
    categories: CategoryFlags,
    options: BatchOptions,
    sink: &mut S,
) -> Result<RunStats>
where
    S: LinkSink + ?Sized,
{
    let links = fetch_page_links(client, page_url).await?;

    let mut stats = RunStats::new(page_url);
    stats.links_found = links.len();

    process_links(&links, categories, options, sink, &mut stats).await;
    sink.finish().await?;

    Ok(stats)
}

async fn process_links<S>(
    links: &[String],
    categories: CategoryFlags,
    options: BatchOptions,
    sink: &mut S,
    stats: &mut RunStats,
) where
    S: LinkSink + ?Sized,
{
    for link in filter_links(links, categories) {
        stats.increment_matched();

        match sink.accept(link).await {
            Ok(bytes) => {
                stats.record_success(bytes);
                if options.show_progress {
                    tracing::info!("{}: {}", sink.label(), link);
                }
            }
            Err(e) => {
                stats.record_failure(link, &e);
                if e.aborts_batch() || options.failure_policy == FailurePolicy::FailFast {
                    tracing::warn!("Stopping batch at {}: {}", link, e);
                    stats.abort(e);
                    return;
                }
                tracing::warn!("Skipping {}: {}", link, e);
            }
        }
    }
}

/// Download every matching archive on `page_url` into `output_dir`.
pub async fn download_archives(
    client: &PageClient,
    page_url: &str,
    output_dir: &Path,
    categories: CategoryFlags,
    options: BatchOptions,
) -> Result<RunStats> {
    let mut downloader =
        ArchiveDownloader::create(client.clone(), output_dir, options.show_progress).await?;
    run_pipeline(client, page_url, categories, options, &mut downloader).await
}

/// Append every matching link on `page_url` to `output_file`.
pub async fn record_links(
    client: &PageClient,
    page_url: &str,
    output_file: &Path,
    categories: CategoryFlags,
    options: BatchOptions,
) -> Result<RunStats> {
    let mut recorder = LinkRecorder::open(output_file).await?;
    run_pipeline(client, page_url, categories, options, &mut recorder).await
}

/// Run the operation selected by `settings`.
pub async fn run(settings: &Settings) -> Result<RunStats> {
    let client = PageClient::new(&settings.user_agent, settings.timeout)?;
    let options = BatchOptions {
        failure_policy: settings.failure_policy,
        show_progress: settings.show_progress,
    };

    match settings.mode {
        RunMode::Download => {
            download_archives(
                &client,
                &settings.source_url,
                &settings.output,
                settings.categories,
                options,
            )
            .await
        }
        RunMode::Record => {
            record_links(
                &client,
                &settings.source_url,
                &settings.output,
                settings.categories,
                options,
            )
            .await
        }
    }
}
