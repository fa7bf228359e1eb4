//! Shared HTTP plumbing for HTML sources.

use std::time::Duration;

use log::debug;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE, USER_AGENT};
use reqwest::{redirect, Client};

use crate::errors::SourceError;

const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Default HTTP request timeout
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Browser-like headers. Several of the sites refuse requests without them.
pub fn browser_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(USER_AGENT, HeaderValue::from_static(DEFAULT_USER_AGENT));
    headers.insert(
        ACCEPT,
        HeaderValue::from_static(
            "text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,*/*;q=0.8",
        ),
    );
    headers.insert(
        ACCEPT_LANGUAGE,
        HeaderValue::from_static("en-US,en;q=0.5,hu;q=0.3"),
    );
    headers
}

/// Fetches HTML pages on behalf of a source.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Clone, Debug)]
pub struct PageFetcher {
    client: Client,
}

impl PageFetcher {
    pub fn new() -> Self {
        Self::with_timeout(REQUEST_TIMEOUT)
    }

    /// Create a fetcher with a custom request timeout.
    pub fn with_timeout(timeout: Duration) -> Self {
        let client = Client::builder()
            .default_headers(browser_headers())
            .redirect(redirect::Policy::limited(10))
            .timeout(timeout)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self { client }
    }

    /// GET `url` and return the body as text.
    ///
    /// Non-success statuses become [`SourceError::HttpStatus`].
    pub async fn fetch_html(&self, source_name: &str, url: &str) -> Result<String, SourceError> {
        debug!("{}: fetching {}", source_name, url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| SourceError::from_reqwest(source_name, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::HttpStatus {
                source_name: source_name.to_string(),
                status: status.as_u16(),
            });
        }

        response
            .text()
            .await
            .map_err(|e| SourceError::from_reqwest(source_name, e))
    }
}

impl Default for PageFetcher {
    fn default() -> Self {
        Self::new()
    }
}
