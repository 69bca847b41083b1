//! Result normalizer: provider records → [`PaperResult`]s.

use crate::models::{PaperResult, ProviderPaper};

/// Normalized papers plus every abstract concatenated for keyword mining.
#[derive(Debug, Clone, Default)]
pub struct Normalized {
    pub papers: Vec<PaperResult>,
    pub abstracts: String,
}

/// Normalize provider records in order, aggregating abstracts in the same pass.
#[must_use]
pub fn normalize(records: &[ProviderPaper]) -> Normalized {
    let mut out = Normalized { papers: Vec::with_capacity(records.len()), abstracts: String::new() };

    for record in records {
        let paper = to_result(record);
        out.abstracts.push(' ');
        out.abstracts.push_str(&paper.summary);
        out.papers.push(paper);
    }

    out
}

/// Build a single [`PaperResult`].
#[must_use]
pub fn to_result(record: &ProviderPaper) -> PaperResult {
    PaperResult {
        title: record.title.clone(),
        authors: record.authors.clone(),
        summary: record.summary.replace('\n', " "),
        published: record.published.format("%Y-%m-%d").to_string(),
        pdf_url: record.pdf_url.clone(),
        bibtex: bibtex(record),
    }
}

/// Identifier without its version suffix: everything before the first `v`.
#[must_use]
pub fn eprint(short_id: &str) -> &str {
    short_id.split('v').next().unwrap_or(short_id)
}

/// BibTeX `@misc` entry for an arXiv paper.
#[must_use]
pub fn bibtex(record: &ProviderPaper) -> String {
    let short_id = record.short_id();
    format!(
        "@misc{{{key},\n      author    = {{{authors}}},\n      title     = {{{title}}},\n      year      = {{{year}}},\n      eprint    = {{{eprint}}},\n      archivePrefix = {{arXiv}},\n      primaryClass = {{{class}}}\n}}",
        key = short_id,
        authors = record.authors.join(" and "),
        title = record.title,
        year = record.published.format("%Y"),
        eprint = eprint(short_id),
        class = record.primary_category,
    )
}
