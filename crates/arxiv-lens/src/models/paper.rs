//! Paper data models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A paper as delivered by the search provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderPaper {
    /// Canonical entry URL, e.g. `http://arxiv.org/abs/2101.00001v2`.
    pub entry_id: String,

    /// Paper title.
    pub title: String,

    /// Author names in byline order.
    pub authors: Vec<String>,

    /// Abstract, possibly spanning several lines.
    pub summary: String,

    /// First submission timestamp.
    pub published: DateTime<Utc>,

    /// Link to the PDF.
    pub pdf_url: String,

    /// Primary subject category, e.g. `cs.CL`.
    pub primary_category: String,
}

impl ProviderPaper {
    /// Short identifier, e.g. `2101.00001v2` or `hep-th/9901001v1`.
    #[must_use]
    pub fn short_id(&self) -> &str {
        self.entry_id.rsplit("arxiv.org/abs/").next().unwrap_or(&self.entry_id)
    }
}

/// A normalized paper returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaperResult {
    /// Paper title.
    pub title: String,

    /// Author names in byline order.
    pub authors: Vec<String>,

    /// Abstract on a single line.
    pub summary: String,

    /// Publication date as `YYYY-MM-DD`.
    pub published: String,

    /// Link to the PDF.
    pub pdf_url: String,

    /// Ready-to-paste BibTeX entry.
    pub bibtex: String,
}

/// Body of a successful `/search` response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResponse {
    /// Normalized papers in provider order.
    pub papers: Vec<PaperResult>,

    /// Up to ten follow-up keywords.
    pub suggestions: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paper_with_id(entry_id: &str) -> ProviderPaper {
        ProviderPaper {
            entry_id: entry_id.to_string(),
            title: String::new(),
            authors: vec![],
            summary: String::new(),
            published: DateTime::<Utc>::MIN_UTC,
            pdf_url: String::new(),
            primary_category: String::new(),
        }
    }

    #[test]
    fn test_short_id_new_style() {
        assert_eq!(paper_with_id("http://arxiv.org/abs/2101.00001v2").short_id(), "2101.00001v2");
    }

    #[test]
    fn test_short_id_old_style() {
        assert_eq!(
            paper_with_id("http://arxiv.org/abs/hep-th/9901001v1").short_id(),
            "hep-th/9901001v1"
        );
    }

    #[test]
    fn test_short_id_without_prefix() {
        assert_eq!(paper_with_id("2101.00001").short_id(), "2101.00001");
    }

    #[test]
    fn test_search_response_shape() {
        let json = serde_json::to_value(SearchResponse::default()).unwrap();
        assert_eq!(json, serde_json::json!({"papers": [], "suggestions": []}));
    }
}
