//! Link discovery module.
//!
//! Provides:
//! - Page fetching and anchor extraction
//! - Category filtering of archive links

pub mod extract;
pub mod filter;

pub use extract::extract_links;
pub use filter::{filter_links, Category, CategoryFlags, ARCHIVE_SUFFIX};

use crate::error::Result;
use crate::http::PageClient;

/// Fetch a page and return the `href` of every anchor on it, in document order.
pub async fn fetch_page_links(client: &PageClient, page_url: &str) -> Result<Vec<String>> {
    let html = client.fetch_page(page_url).await?;
    let links = extract_links(&html)?;

    tracing::debug!("Found {} anchor(s) on {}", links.len(), page_url);

    Ok(links)
}
