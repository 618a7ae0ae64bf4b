//! HTTP fetching behind a trait seam
//!
//! Extractors talk to the network exclusively through [`PageClient`], which
//! keeps them testable with canned page content and keeps transport policy
//! (timeouts, user agent) in one place. No retry logic lives here; failures
//! propagate unchanged to the caller.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use crate::config::HttpConfig;
use crate::errors::AppResult;

/// Page-oriented HTTP client used by extractors
#[async_trait]
pub trait PageClient: Send + Sync {
    /// Fetch URL and return its body as text
    async fn fetch_text(&self, url: &str) -> AppResult<String>;

    /// Fetch URL with custom request headers and return its body as text
    async fn fetch_text_with_headers(
        &self,
        url: &str,
        headers: &[(&str, &str)],
    ) -> AppResult<String>;

    /// Issue a GET whose response is discarded
    ///
    /// Transport and status errors are swallowed as well: callers use this
    /// for requests that exist only for their server-side effect.
    async fn fire_and_forget(&self, url: &str);
}

/// Default implementation of [`PageClient`] using reqwest
pub struct StandardHttpClient {
    client: Client,
}

impl StandardHttpClient {
    /// Create a new HTTP client with the default connection timeout
    pub fn new() -> Self {
        Self::with_connect_timeout(Duration::from_secs(10), None)
    }

    /// Create a new HTTP client from configuration
    pub fn from_config(config: &HttpConfig) -> Self {
        Self::with_connect_timeout(
            Duration::from_secs(config.connect_timeout_secs),
            Some(config.user_agent.as_str()),
        )
    }

    /// Create a new HTTP client with only a connection timeout (no total
    /// request timeout), so long media descriptor transfers are not cut off
    pub fn with_connect_timeout(connect_timeout: Duration, user_agent: Option<&str>) -> Self {
        let mut builder = Client::builder().connect_timeout(connect_timeout);
        if let Some(agent) = user_agent {
            builder = builder.user_agent(agent.to_string());
        }
        let client = builder.build().expect("Failed to create HTTP client");

        Self { client }
    }
}

impl Default for StandardHttpClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PageClient for StandardHttpClient {
    async fn fetch_text(&self, url: &str) -> AppResult<String> {
        debug!("Fetching text content from: {}", url);

        let response = self.client.get(url).send().await?.error_for_status()?;
        let content = response.text().await?;

        debug!("Successfully fetched {} characters of text content", content.len());
        Ok(content)
    }

    async fn fetch_text_with_headers(
        &self,
        url: &str,
        headers: &[(&str, &str)],
    ) -> AppResult<String> {
        debug!("Fetching text content with headers from: {}", url);

        let mut request = self.client.get(url);
        for (name, value) in headers {
            request = request.header(*name, *value);
        }

        let response = request.send().await?.error_for_status()?;
        let content = response.text().await?;

        debug!(
            "Successfully fetched {} characters of text content with headers",
            content.len()
        );
        Ok(content)
    }

    async fn fire_and_forget(&self, url: &str) {
        debug!("Issuing fire-and-forget request to: {}", url);

        if let Err(e) = self.client.get(url).send().await {
            // Result is unused by design, so a failure is only worth a log line
            debug!("Fire-and-forget request failed: {}", e);
        }
    }
}
