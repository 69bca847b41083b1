//! Search + suggest pipeline.
//!
//! Query builder → [`PaperProvider`] → result normalizer → keyword suggester.

pub mod normalize;
pub mod query;
pub mod suggest;

use std::sync::Arc;

use crate::config::search::MAX_SUGGESTIONS;
use crate::error::{ClientResult, SearchError};
use crate::models::{ProviderPaper, ProviderQuery, SearchRequest, SearchResponse};

/// An external paper search backend.
#[async_trait::async_trait]
pub trait PaperProvider: Send + Sync {
    /// Run a query and return records in provider order.
    async fn search(&self, query: &ProviderQuery) -> ClientResult<Vec<ProviderPaper>>;
}

/// Runs the search pipeline for one request.
#[derive(Clone)]
pub struct SearchService {
    provider: Arc<dyn PaperProvider>,
}

impl SearchService {
    /// Create a service backed by `provider`.
    #[must_use]
    pub fn new(provider: Arc<dyn PaperProvider>) -> Self {
        Self { provider }
    }

    /// Search, normalize and suggest. Any failure fails the whole request.
    pub async fn search(&self, request: &SearchRequest) -> Result<SearchResponse, SearchError> {
        if request.query.trim().is_empty() {
            return Err(SearchError::validation("query", "Query parameter is required"));
        }
        if request.max_results == 0 {
            return Err(SearchError::validation("max_results", "max_results must be positive"));
        }

        let query = query::build_query(request);
        tracing::info!(
            search_query = %query.search_query,
            max_results = query.max_results,
            sort_by = query.sort_by.as_api_str(),
            sort_order = query.sort_order.as_api_str(),
            "Searching papers"
        );

        let records = self.provider.search(&query).await?;
        let normalized = normalize::normalize(&records);
        let suggestions =
            suggest::suggest_keywords(&normalized.abstracts, &request.query, MAX_SUGGESTIONS);

        tracing::debug!(papers = normalized.papers.len(), suggestions = suggestions.len(), "Search done");

        Ok(SearchResponse { papers: normalized.papers, suggestions })
    }
}

impl std::fmt::Debug for SearchService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchService").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use chrono::{TimeZone, Utc};

    use super::*;
    use crate::error::ClientError;

    struct FakeProvider {
        papers: Vec<ProviderPaper>,
        seen: Mutex<Vec<ProviderQuery>>,
    }

    #[async_trait::async_trait]
    impl PaperProvider for FakeProvider {
        async fn search(&self, query: &ProviderQuery) -> ClientResult<Vec<ProviderPaper>> {
            self.seen.lock().unwrap().push(query.clone());
            Ok(self.papers.clone())
        }
    }

    struct FailingProvider;

    #[async_trait::async_trait]
    impl PaperProvider for FailingProvider {
        async fn search(&self, _query: &ProviderQuery) -> ClientResult<Vec<ProviderPaper>> {
            Err(ClientError::server(503, "arXiv is down"))
        }
    }

    fn paper(summary: &str) -> ProviderPaper {
        ProviderPaper {
            entry_id: "http://arxiv.org/abs/2401.00001v1".to_string(),
            title: "T".to_string(),
            authors: vec!["A".to_string()],
            summary: summary.to_string(),
            published: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
            pdf_url: "http://arxiv.org/pdf/2401.00001v1".to_string(),
            primary_category: "cs.AI".to_string(),
        }
    }

    #[tokio::test]
    async fn test_pipeline_suggests_from_abstracts() {
        let provider = Arc::new(FakeProvider {
            papers: vec![paper("Deep learning\nimproves robotics"), paper("robotics planning")],
            seen: Mutex::new(Vec::new()),
        });
        let service = SearchService::new(provider.clone());

        let response = service.search(&SearchRequest::new("deep")).await.unwrap();

        assert_eq!(response.papers.len(), 2);
        assert_eq!(response.papers[0].summary, "Deep learning improves robotics");
        assert_eq!(response.suggestions, vec!["robotics", "learning", "improves", "planning"]);
        assert_eq!(provider.seen.lock().unwrap()[0].search_query, "deep");
    }

    #[tokio::test]
    async fn test_empty_results_give_empty_suggestions() {
        let provider = Arc::new(FakeProvider { papers: vec![], seen: Mutex::new(Vec::new()) });
        let response = SearchService::new(provider).search(&SearchRequest::new("x")).await.unwrap();
        assert!(response.papers.is_empty());
        assert!(response.suggestions.is_empty());
    }

    #[tokio::test]
    async fn test_provider_failure_propagates() {
        let service = SearchService::new(Arc::new(FailingProvider));
        let err = service.search(&SearchRequest::new("x")).await.unwrap_err();
        assert!(matches!(err, SearchError::Client(ClientError::Server { status: 503, .. })));
    }

    #[tokio::test]
    async fn test_blank_query_rejected_before_provider() {
        let provider = Arc::new(FakeProvider { papers: vec![], seen: Mutex::new(Vec::new()) });
        let service = SearchService::new(provider.clone());
        let err = service.search(&SearchRequest::new("  ")).await.unwrap_err();
        assert!(matches!(err, SearchError::Validation { .. }));
        assert!(provider.seen.lock().unwrap().is_empty());
    }
}
