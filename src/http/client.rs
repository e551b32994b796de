//! HTTP client for page and archive requests.

use std::time::Duration;

use reqwest::{Client, Response};

use crate::error::{Error, Result};

/// HTTP client shared by the page fetch and every archive download.
#[derive(Debug, Clone)]
pub struct PageClient {
    client: Client,
}

impl PageClient {
    /// Build a client with the given user agent and optional per-request timeout.
    pub fn new(user_agent: &str, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = Client::builder().user_agent(user_agent);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        let client = builder
            .build()
            .map_err(|e| Error::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client })
    }

    /// Retrieve a page and decode its body as UTF-8.
    pub async fn fetch_page(&self, url: &str) -> Result<String> {
        tracing::debug!("Fetching page {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| Error::fetch(url, e))?;

        if !response.status().is_success() {
            return Err(Error::Fetch {
                url: url.to_string(),
                message: format!("HTTP {}", response.status()),
            });
        }

        let body = response.bytes().await.map_err(|e| Error::fetch(url, e))?;

        String::from_utf8(body.to_vec()).map_err(|e| Error::Fetch {
            url: url.to_string(),
            message: format!("Body is not valid UTF-8: {}", e),
        })
    }

    /// Open a streaming GET for an archive.
    pub async fn download_file(&self, url: &str) -> Result<Response> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| Error::download(url, e))?;

        if !response.status().is_success() {
            return Err(Error::Download {
                url: url.to_string(),
                message: format!("HTTP {}", response.status()),
            });
        }

        Ok(response)
    }
}
