//! Adjust HTTP client abstractions
//!
//! HTTP取得の抽象化と reqwest 実装

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;

#[cfg(test)]
use mockall::automock;

/// Trait for retrieving a KPI report body.
/// This enables mocking in tests while using reqwest in production
#[cfg_attr(test, automock)]
#[async_trait]
pub trait KpiClient: Send + Sync {
    /// GET the URL and return the response body as text
    ///
    /// Errors must not echo the URL, which carries the API token.
    async fn get_csv(&self, url: &str) -> Result<String>;
}

/// reqwest-backed client
pub struct HttpKpiClient {
    client: Client,
}

impl HttpKpiClient {
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("adjust-collector/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Self { client })
    }

    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[cfg_attr(coverage_nightly, coverage(off))]
#[async_trait]
impl KpiClient for HttpKpiClient {
    async fn get_csv(&self, url: &str) -> Result<String> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(reqwest::Error::without_url)
            .context("HTTP request failed")?
            .error_for_status()
            .map_err(reqwest::Error::without_url)
            .context("Adjust API returned an error status")?;

        response
            .text()
            .await
            .context("Failed to read response body")
    }
}
