//! wdc-table-downloader - batch retrieval of zipped table archives.
//!
//! This library fetches a webpage, keeps the `.zip` links whose filename
//! carries an enabled category marker and hands each one to a sink.
//!
//! # Features
//!
//! - Anchor extraction with a lenient HTML parser
//! - Category filtering (`_top100`, `_minimum3`, `_rest`)
//! - Streaming archive downloads
//! - Append-only link recording
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use wdc_table_downloader::{record_links, BatchOptions, PageClient, RunMode};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = PageClient::new("wdc-table-downloader", None)?;
//!     let stats = record_links(
//!         &client,
//!         "http://webdatacommons.org/structureddata/schemaorgtables/",
//!         Path::new("links.txt"),
//!         RunMode::Record.default_categories(),
//!         BatchOptions::default(),
//!     )
//!     .await?;
//!
//!     println!("{} link(s) recorded", stats.succeeded);
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod fs;
pub mod http;
pub mod links;
pub mod output;
pub mod pipeline;
pub mod sink;

// Re-exports for convenience
pub use config::{FailurePolicy, RunMode, Settings};
pub use error::{Error, Result};
pub use http::PageClient;
pub use links::{extract_links, fetch_page_links, filter_links, Category, CategoryFlags};
pub use pipeline::{
    download_archives, record_links, run_pipeline, BatchOptions, LinkFailure, RunStats,
};
pub use sink::{ArchiveDownloader, LinkRecorder, LinkSink};
