//! arXiv API client.
//!
//! Provides an async HTTP client with:
//! - Connection pooling via reqwest
//! - Transparent paging for large `max_results`
//! - A polite delay between page requests
//!
//! Failures are never retried; the first error aborts the search.

pub mod atom;

use std::time::Duration;

use reqwest::Client;

use crate::config::Config;
use crate::error::{ClientError, ClientResult};
use crate::models::{ProviderPaper, ProviderQuery};
use crate::search::PaperProvider;

/// arXiv API client.
#[derive(Clone)]
pub struct ArxivClient {
    /// HTTP client.
    client: Client,

    /// Query endpoint.
    api_url: String,

    /// Entries requested per page.
    page_size: usize,

    /// Delay between page requests.
    page_delay: Duration,
}

impl ArxivClient {
    /// Create a new client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns error if HTTP client initialization fails.
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        anyhow::ensure!(config.page_size > 0, "page size must be positive");

        let client = Client::builder()
            .user_agent(crate::config::api::USER_AGENT)
            .timeout(config.request_timeout)
            .connect_timeout(config.connect_timeout)
            .gzip(true)
            .build()?;

        Ok(Self {
            client,
            api_url: config.arxiv_api_url.clone(),
            page_size: config.page_size,
            page_delay: config.page_delay,
        })
    }

    /// Run a query, paging until `max_results` entries are collected or arXiv
    /// runs out of results.
    ///
    /// # Errors
    ///
    /// Returns error on transport failure, non-success status, or a malformed feed.
    pub async fn search(&self, query: &ProviderQuery) -> ClientResult<Vec<ProviderPaper>> {
        let mut papers = Vec::with_capacity(query.max_results.min(self.page_size));
        let mut start = 0;

        while papers.len() < query.max_results {
            if start > 0 {
                tokio::time::sleep(self.page_delay).await;
            }

            let want = (query.max_results - papers.len()).min(self.page_size);
            let feed = self.fetch_page(query, start, want).await?;
            let received = feed.entries.len();

            tracing::debug!(start, want, received, total = ?feed.total_results, "Fetched arXiv page");

            papers.extend(feed.entries);
            start += received;

            if received == 0 || feed.total_results.is_some_and(|total| start >= total) {
                break;
            }
        }

        papers.truncate(query.max_results);
        Ok(papers)
    }

    /// Fetch a single page of results.
    async fn fetch_page(
        &self,
        query: &ProviderQuery,
        start: usize,
        max_results: usize,
    ) -> ClientResult<atom::Feed> {
        let params = [
            ("search_query", query.search_query.clone()),
            ("start", start.to_string()),
            ("max_results", max_results.to_string()),
            ("sortBy", query.sort_by.as_api_str().to_string()),
            ("sortOrder", query.sort_order.as_api_str().to_string()),
        ];

        let response = self.client.get(&self.api_url).query(&params).send().await?;
        let response = Self::handle_response(response).await?;
        let body = response.text().await?;

        atom::parse_feed(&body)
    }

    /// Handle API response status codes.
    async fn handle_response(response: reqwest::Response) -> ClientResult<reqwest::Response> {
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        match status.as_u16() {
            429 => {
                let retry_after = response
                    .headers()
                    .get("Retry-After")
                    .and_then(|v| v.to_str().ok())
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(60);

                Err(ClientError::rate_limited(retry_after))
            }
            400 => {
                let text = response.text().await.unwrap_or_default();
                let message = atom::error_message(&text).unwrap_or(text);
                Err(ClientError::bad_request(message))
            }
            500..=599 => {
                let text = response.text().await.unwrap_or_default();
                Err(ClientError::server(status.as_u16(), text))
            }
            _ => {
                let text = response.text().await.unwrap_or_default();
                Err(ClientError::UnexpectedStatus { status: status.as_u16(), message: text })
            }
        }
    }
}

#[async_trait::async_trait]
impl PaperProvider for ArxivClient {
    async fn search(&self, query: &ProviderQuery) -> ClientResult<Vec<ProviderPaper>> {
        Self::search(self, query).await
    }
}

impl std::fmt::Debug for ArxivClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ArxivClient")
            .field("api_url", &self.api_url)
            .field("page_size", &self.page_size)
            .finish()
    }
}
