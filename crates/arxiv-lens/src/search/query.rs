//! Query builder: turns a [`SearchRequest`] into what the provider receives.
//!
//! Sort semantics are decided here and nowhere else.

use chrono::NaiveDate;

use crate::models::{ProviderQuery, SearchRequest, SortBy, SortCriterion, SortOrder};

/// Appended to a present start date (00:00).
pub const START_OF_DAY: &str = "0000";

/// Appended to a present end date. 14:59 UTC, which is 23:59 JST.
pub const END_OF_DAY: &str = "1459";

/// Build the provider query for a request.
#[must_use]
pub fn build_query(request: &SearchRequest) -> ProviderQuery {
    let (sort_by, sort_order) = sort_spec(request.sort_by);
    ProviderQuery {
        search_query: search_query(&request.query, request.start_date, request.end_date),
        max_results: request.max_results,
        sort_by,
        sort_order,
    }
}

/// The `search_query` string: the raw term, plus a submission date clause when
/// either bound is present.
#[must_use]
pub fn search_query(term: &str, start: Option<NaiveDate>, end: Option<NaiveDate>) -> String {
    if start.is_none() && end.is_none() {
        return term.to_string();
    }
    format!("{term} AND {}", date_clause(start, end))
}

/// `submittedDate:[START TO END]`, with `*` for a missing bound.
#[must_use]
pub fn date_clause(start: Option<NaiveDate>, end: Option<NaiveDate>) -> String {
    let start = start.map_or_else(|| "*".to_string(), |d| compact(d, START_OF_DAY));
    let end = end.map_or_else(|| "*".to_string(), |d| compact(d, END_OF_DAY));
    format!("submittedDate:[{start} TO {end}]")
}

fn compact(date: NaiveDate, time: &str) -> String {
    format!("{}{time}", date.format("%Y%m%d"))
}

/// Map the user-facing sort choice to the provider's criterion and order.
#[must_use]
pub const fn sort_spec(sort_by: SortBy) -> (SortCriterion, SortOrder) {
    match sort_by {
        SortBy::Newest => (SortCriterion::SubmittedDate, SortOrder::Descending),
        SortBy::Oldest => (SortCriterion::SubmittedDate, SortOrder::Ascending),
        SortBy::Relevance => (SortCriterion::Relevance, SortOrder::Descending),
    }
}
