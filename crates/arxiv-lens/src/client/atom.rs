//! Minimal Atom feed reader for arXiv API responses.
//!
//! arXiv answers every query with an Atom 1.0 feed. Only the handful of
//! elements the search pipeline needs are extracted; everything else is
//! ignored.

use chrono::{DateTime, Utc};

use crate::error::{ClientError, ClientResult};
use crate::models::ProviderPaper;

/// One page of an arXiv feed.
#[derive(Debug, Clone, Default)]
pub struct Feed {
    /// `opensearch:totalResults`, when present.
    pub total_results: Option<usize>,

    /// Entries in feed order.
    pub entries: Vec<ProviderPaper>,
}

/// Parse an arXiv Atom feed.
///
/// arXiv reports query errors as a feed holding a single entry whose id points
/// at `/api/errors`; that case becomes [`ClientError::BadRequest`].
pub fn parse_feed(xml: &str) -> ClientResult<Feed> {
    let total_results = tag_text(xml, "opensearch:totalResults").and_then(|t| t.trim().parse().ok());

    let mut entries = Vec::new();
    for block in blocks(xml, "entry") {
        if let Some(message) = api_error(block) {
            return Err(ClientError::bad_request(message));
        }
        entries.push(parse_entry(block)?);
    }

    Ok(Feed { total_results, entries })
}

/// Extract the error message from an arXiv error feed, if it is one.
#[must_use]
pub fn error_message(xml: &str) -> Option<String> {
    blocks(xml, "entry").into_iter().find_map(api_error)
}

fn api_error(entry: &str) -> Option<String> {
    let id = tag_text(entry, "id")?;
    if !id.contains("/api/errors") {
        return None;
    }
    let summary = tag_text(entry, "summary").map(|s| unescape(s.trim()));
    Some(summary.unwrap_or_else(|| unescape(id.trim())))
}

fn parse_entry(entry: &str) -> ClientResult<ProviderPaper> {
    let entry_id = tag_text(entry, "id")
        .map(|id| unescape(id.trim()))
        .ok_or_else(|| ClientError::parse("entry without <id>"))?;

    let title = tag_text(entry, "title").map(|t| collapse_whitespace(&unescape(t))).unwrap_or_default();
    let summary = tag_text(entry, "summary").map(|s| unescape(s.trim())).unwrap_or_default();

    let authors = blocks(entry, "author")
        .into_iter()
        .filter_map(|author| tag_text(author, "name"))
        .map(|name| collapse_whitespace(&unescape(name)))
        .collect();

    let published_raw = tag_text(entry, "published")
        .ok_or_else(|| ClientError::parse(format!("entry {entry_id} has no <published>")))?;
    let published = DateTime::parse_from_rfc3339(published_raw.trim())
        .map_err(|e| {
            ClientError::parse(format!("entry {entry_id} has invalid <published> '{published_raw}': {e}"))
        })?
        .with_timezone(&Utc);

    let pdf_url = start_tags(entry, "link")
        .into_iter()
        .find(|link| {
            attribute(link, "title").as_deref() == Some("pdf")
                || attribute(link, "type").as_deref() == Some("application/pdf")
        })
        .and_then(|link| attribute(link, "href"))
        .unwrap_or_else(|| entry_id.replacen("/abs/", "/pdf/", 1));

    let primary_category = start_tags(entry, "arxiv:primary_category")
        .first()
        .and_then(|tag| attribute(tag, "term"))
        .or_else(|| start_tags(entry, "category").first().and_then(|tag| attribute(tag, "term")))
        .unwrap_or_default();

    Ok(ProviderPaper { entry_id, title, authors, summary, published, pdf_url, primary_category })
}

/// Find the end of `<name` when it is a complete element name.
fn open_tag_at(xml: &str, from: usize, name: &str) -> Option<(usize, usize)> {
    let needle = format!("<{name}");
    let mut search = from;
    while let Some(pos) = xml[search..].find(&needle) {
        let start = search + pos;
        let after = start + needle.len();
        match xml[after..].chars().next() {
            Some(c) if c == '>' || c == '/' || c.is_whitespace() => {
                let end = xml[after..].find('>')? + after + 1;
                return Some((start, end));
            }
            Some(_) => search = after,
            None => return None,
        }
    }
    None
}

/// Every `<name ...>...</name>` block, outer tags included.
fn blocks<'a>(xml: &'a str, name: &str) -> Vec<&'a str> {
    let close = format!("</{name}>");
    let mut out = Vec::new();
    let mut search = 0;

    while let Some((start, open_end)) = open_tag_at(xml, search, name) {
        if xml[..open_end].ends_with("/>") {
            out.push(&xml[start..open_end]);
            search = open_end;
            continue;
        }
        let Some(pos) = xml[open_end..].find(&close) else {
            break;
        };
        let end = open_end + pos + close.len();
        out.push(&xml[start..end]);
        search = end;
    }

    out
}

/// Every opening (or self-closing) `<name ...>` tag.
fn start_tags<'a>(xml: &'a str, name: &str) -> Vec<&'a str> {
    let mut out = Vec::new();
    let mut search = 0;
    while let Some((start, end)) = open_tag_at(xml, search, name) {
        out.push(&xml[start..end]);
        search = end;
    }
    out
}

/// Raw text between the first `<name>` and its closing tag.
fn tag_text<'a>(xml: &'a str, name: &str) -> Option<&'a str> {
    let (_, open_end) = open_tag_at(xml, 0, name)?;
    if xml[..open_end].ends_with("/>") {
        return Some("");
    }
    let close = format!("</{name}>");
    let len = xml[open_end..].find(&close)?;
    Some(&xml[open_end..open_end + len])
}

fn attribute(tag: &str, name: &str) -> Option<String> {
    let needle = format!(" {name}=\"");
    let start = tag.find(&needle)? + needle.len();
    let len = tag[start..].find('"')?;
    Some(unescape(&tag[start..start + len]))
}

fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn unescape(s: &str) -> String {
    if !s.contains('&') {
        return s.to_string();
    }
    s.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&apos;", "'")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}
