//! Search request models.

use chrono::NaiveDate;
use serde::Deserialize;

use crate::config::search::DEFAULT_MAX_RESULTS;
use crate::error::SearchError;

/// User-facing sort choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortBy {
    /// Best match first.
    #[default]
    Relevance,
    /// Most recently submitted first.
    Newest,
    /// Earliest submitted first.
    Oldest,
}

impl SortBy {
    /// Parse a `sort_by` parameter. Unknown values fall back to relevance.
    #[must_use]
    pub fn from_param(value: &str) -> Self {
        match value {
            "newest" => Self::Newest,
            "oldest" => Self::Oldest,
            _ => Self::Relevance,
        }
    }
}

/// Sort criterion understood by the arXiv API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortCriterion {
    Relevance,
    SubmittedDate,
}

impl SortCriterion {
    /// Value of the `sortBy` query parameter.
    #[must_use]
    pub const fn as_api_str(self) -> &'static str {
        match self {
            Self::Relevance => "relevance",
            Self::SubmittedDate => "submittedDate",
        }
    }
}

/// Sort order understood by the arXiv API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    Descending,
}

impl SortOrder {
    /// Value of the `sortOrder` query parameter.
    #[must_use]
    pub const fn as_api_str(self) -> &'static str {
        match self {
            Self::Ascending => "ascending",
            Self::Descending => "descending",
        }
    }
}

/// Raw `/search` query string parameters.
///
/// Everything is optional text so that validation errors can be reported as
/// 400s with a readable message instead of an extractor rejection.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub query: Option<String>,
    #[serde(default)]
    pub max_results: Option<String>,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub sort_by: Option<String>,
}

impl SearchParams {
    /// Validate raw parameters into a [`SearchRequest`].
    pub fn into_request(self) -> Result<SearchRequest, SearchError> {
        let query = self.query.unwrap_or_default();
        if query.trim().is_empty() {
            return Err(SearchError::validation("query", "Query parameter is required"));
        }

        let max_results = match non_empty(self.max_results) {
            None => DEFAULT_MAX_RESULTS,
            Some(raw) => match raw.trim().parse::<usize>() {
                Ok(n) if n > 0 => n,
                _ => {
                    return Err(SearchError::validation(
                        "max_results",
                        format!("max_results must be a positive integer, got '{raw}'"),
                    ));
                }
            },
        };

        let start_date = parse_date("start_date", non_empty(self.start_date))?;
        let end_date = parse_date("end_date", non_empty(self.end_date))?;
        let sort_by = self.sort_by.as_deref().map(SortBy::from_param).unwrap_or_default();

        Ok(SearchRequest { query, max_results, start_date, end_date, sort_by })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

fn parse_date(field: &str, value: Option<String>) -> Result<Option<NaiveDate>, SearchError> {
    value
        .map(|raw| {
            NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").map_err(|_| {
                SearchError::validation(field, format!("{field} must be YYYY-MM-DD, got '{raw}'"))
            })
        })
        .transpose()
}

/// A validated search request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    /// Main query term, passed to the provider as-is.
    pub query: String,
    /// Maximum number of papers to return.
    pub max_results: usize,
    /// Lower submission date bound.
    pub start_date: Option<NaiveDate>,
    /// Upper submission date bound.
    pub end_date: Option<NaiveDate>,
    /// Result ordering.
    pub sort_by: SortBy,
}

impl SearchRequest {
    /// Create a request with default limits, no date filter and relevance order.
    #[must_use]
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            max_results: DEFAULT_MAX_RESULTS,
            start_date: None,
            end_date: None,
            sort_by: SortBy::default(),
        }
    }

    #[must_use]
    pub fn with_max_results(mut self, max_results: usize) -> Self {
        self.max_results = max_results;
        self
    }

    #[must_use]
    pub fn with_dates(mut self, start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        self.start_date = start;
        self.end_date = end;
        self
    }

    #[must_use]
    pub fn with_sort(mut self, sort_by: SortBy) -> Self {
        self.sort_by = sort_by;
        self
    }
}

/// What is actually sent to the search provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderQuery {
    /// Full `search_query` string.
    pub search_query: String,
    /// Maximum number of entries to fetch.
    pub max_results: usize,
    /// Sort criterion.
    pub sort_by: SortCriterion,
    /// Sort direction.
    pub sort_order: SortOrder,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(query: Option<&str>) -> SearchParams {
        SearchParams { query: query.map(str::to_string), ..SearchParams::default() }
    }

    #[test]
    fn test_missing_query_rejected() {
        let err = params(None).into_request().unwrap_err();
        assert!(matches!(err, SearchError::Validation { ref field, .. } if field == "query"));

        assert!(params(Some("")).into_request().is_err());
        assert!(params(Some("   ")).into_request().is_err());
    }

    #[test]
    fn test_defaults_applied() {
        let req = params(Some("transformers")).into_request().unwrap();
        assert_eq!(req.query, "transformers");
        assert_eq!(req.max_results, 5);
        assert_eq!(req.start_date, None);
        assert_eq!(req.end_date, None);
        assert_eq!(req.sort_by, SortBy::Relevance);
    }

    #[test]
    fn test_empty_dates_are_absent() {
        let raw = SearchParams {
            start_date: Some(String::new()),
            end_date: Some(String::new()),
            max_results: Some(String::new()),
            ..params(Some("q"))
        };
        let req = raw.into_request().unwrap();
        assert_eq!(req.start_date, None);
        assert_eq!(req.end_date, None);
        assert_eq!(req.max_results, 5);
    }

    #[test]
    fn test_invalid_max_results_rejected() {
        for bad in ["0", "-3", "ten", "2.5"] {
            let raw = SearchParams { max_results: Some(bad.to_string()), ..params(Some("q")) };
            assert!(raw.into_request().is_err(), "{bad} should be rejected");
        }
    }

    #[test]
    fn test_invalid_date_rejected() {
        let raw = SearchParams { start_date: Some("2024/01/01".to_string()), ..params(Some("q")) };
        let err = raw.into_request().unwrap_err();
        assert!(matches!(err, SearchError::Validation { ref field, .. } if field == "start_date"));
    }

    #[test]
    fn test_sort_from_param() {
        assert_eq!(SortBy::from_param("newest"), SortBy::Newest);
        assert_eq!(SortBy::from_param("oldest"), SortBy::Oldest);
        assert_eq!(SortBy::from_param("relevance"), SortBy::Relevance);
        assert_eq!(SortBy::from_param(""), SortBy::Relevance);
        assert_eq!(SortBy::from_param("NEWEST"), SortBy::Relevance);
        assert_eq!(SortBy::from_param("garbage"), SortBy::Relevance);
    }
}
