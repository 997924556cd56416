//! HTTP client for catalog page fetching
//!
//! Thin reqwest wrapper with a fixed per-request timeout and a rate limiter
//! so sequential page fetches stay polite to the catalog server.

use std::num::NonZeroU32;
use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use governor::{
    clock::DefaultClock,
    state::{direct::NotKeyed, InMemoryState},
    Quota, RateLimiter,
};
use reqwest::{
    header::{HeaderMap, HeaderValue, USER_AGENT},
    Client,
};
use tracing::debug;

use crate::domain::constants::{scraping, site};
use crate::domain::services::PageFetcher;

/// HTTP client configuration for scraping
#[derive(Debug, Clone, serde::Serialize)]
pub struct HttpClientConfig {
    pub base_url: String,
    pub user_agent: String,
    pub timeout_seconds: u64,
    pub max_requests_per_second: u32,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            base_url: site::BASE_URL.to_string(),
            user_agent: "fashion-etl/0.1 (Educational Purpose)".to_string(),
            timeout_seconds: scraping::DEFAULT_TIMEOUT_SECONDS,
            max_requests_per_second: scraping::DEFAULT_MAX_REQUESTS_PER_SECOND,
        }
    }
}

/// HTTP client with rate limiting for respectful scraping
pub struct HttpClient {
    client: Client,
    rate_limiter: RateLimiter<NotKeyed, InMemoryState, DefaultClock>,
    config: HttpClientConfig,
}

impl HttpClient {
    /// Create a new HTTP client with the given configuration
    pub fn new(config: HttpClientConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(
            USER_AGENT,
            HeaderValue::from_str(&config.user_agent).context("Invalid user agent")?,
        );

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .default_headers(headers)
            .build()
            .context("Failed to create HTTP client")?;

        let quota = Quota::per_second(
            NonZeroU32::new(config.max_requests_per_second)
                .context("Rate limit must be greater than 0")?,
        );
        let rate_limiter = RateLimiter::direct(quota);

        Ok(Self {
            client,
            rate_limiter,
            config,
        })
    }

    /// Build the URL for a 1-based page index
    ///
    /// The first page lives at the bare catalog root; later pages use a
    /// page-suffixed path ("/page2", "/page3", ...).
    pub fn page_url(&self, page: u32) -> String {
        let base = self.config.base_url.trim_end_matches('/');
        if page <= site::PAGE_NUMBERING_BASE {
            format!("{base}/")
        } else {
            format!("{base}/{}{page}", site::PAGE_PATH_PREFIX)
        }
    }

    /// Fetch a URL and return the response body
    pub async fn get_text(&self, url: &str) -> Result<String> {
        self.rate_limiter.until_ready().await;

        tracing::info!("Fetching URL: {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .with_context(|| format!("Failed to fetch URL: {url}"))?;

        if !response.status().is_success() {
            anyhow::bail!(
                "HTTP request failed with status {}: {}",
                response.status(),
                url
            );
        }

        let text = response
            .text()
            .await
            .with_context(|| format!("Failed to read response body from: {url}"))?;

        debug!("Successfully fetched: {} ({} chars)", url, text.len());
        Ok(text)
    }

    /// Get the configuration
    pub fn config(&self) -> &HttpClientConfig {
        &self.config
    }
}

#[async_trait]
impl PageFetcher for HttpClient {
    async fn fetch_page(&self, page: u32) -> Result<String> {
        let url = self.page_url(page);
        self.get_text(&url).await
    }
}
