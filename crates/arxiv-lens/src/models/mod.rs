//! Data models shared by the search and translation pipelines.
//!
//! Nothing here outlives a single request.

mod paper;
mod search;
mod translation;

pub use paper::{PaperResult, ProviderPaper, SearchResponse};
pub use search::{ProviderQuery, SearchParams, SearchRequest, SortBy, SortCriterion, SortOrder};
pub use translation::{GenerationParams, TranslationRequest, TranslationResult};
