//! Keyword suggester.
//!
//! Mines follow-up search terms from the abstracts of the current result set:
//! lower-case, tokenize into word runs of three or more characters, drop numbers
//! and stop words, count, drop the user's own query words, keep the most
//! frequent. Ties keep the order in which words first appeared.

use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

use regex::Regex;

/// Common English function words plus domain-generic academic vocabulary.
///
/// Kept exactly as curated, duplicates included.
pub const STOP_WORDS: &[&str] = &[
    "a", "about", "above", "after", "again", "against", "all", "am", "an", "and", "any", "are",
    "as", "at", "be", "because", "been", "before", "being", "below", "between", "both", "but",
    "by", "can", "did", "do", "does", "doing", "down", "during", "each", "few", "for", "from",
    "further", "had", "has", "have", "having", "he", "her", "here", "hers", "herself", "him",
    "himself", "his", "how", "i", "if", "in", "into", "is", "it", "its", "itself", "just", "me",
    "more", "most", "my", "myself", "no", "nor", "not", "of", "off", "on", "once", "only", "or",
    "other", "our", "ours", "ourselves", "out", "over", "own", "s", "same", "she", "should", "so",
    "some", "such", "t", "than", "that", "the", "their", "theirs", "them", "themselves", "then",
    "there", "these", "they", "this", "those", "through", "to", "too", "under", "until", "up",
    "very", "was", "we", "were", "what", "when", "where", "which", "while", "who", "whom", "why",
    "will", "with", "you", "your", "yours", "yourself", "yourselves", "we", "us", "our", "they",
    "them", "their", "it", "its", "this", "that", "these", "those", "paper", "research", "study",
    "results", "method", "methods", "approach", "based", "propose", "proposed", "show", "model",
    "models", "data", "using", "also", "however", "one", "two", "three", "via",
];

static STOP_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| STOP_WORDS.iter().copied().collect());

/// Maximal runs of three or more word characters. Numerals such as `½` count
/// as word characters even though `\w` alone leaves them out.
static WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\w\p{N}]{3,}").expect("word pattern is valid"));

/// Tokens made only of decimal digits, in any script.
static DIGITS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\p{Nd}+$").expect("digit pattern is valid"));

/// Whether `word` (already lower-cased) is a stop word.
#[must_use]
pub fn is_stop_word(word: &str) -> bool {
    STOP_SET.contains(word)
}

/// Suggest up to `limit` keywords from `text`, excluding words of `main_query`.
#[must_use]
pub fn suggest_keywords(text: &str, main_query: &str, limit: usize) -> Vec<String> {
    let lowered = text.to_lowercase();

    let mut counts: Vec<(&str, usize)> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for token in WORD.find_iter(&lowered).map(|m| m.as_str()) {
        if DIGITS.is_match(token) || is_stop_word(token) {
            continue;
        }
        match index.get(token) {
            Some(&i) => counts[i].1 += 1,
            None => {
                index.insert(token, counts.len());
                counts.push((token, 1));
            }
        }
    }

    let query = main_query.to_lowercase();
    let excluded: HashSet<&str> = query.split_whitespace().collect();
    counts.retain(|(word, _)| !excluded.contains(word));

    // stable: equal counts stay in first-seen order
    counts.sort_by(|a, b| b.1.cmp(&a.1));

    counts.into_iter().take(limit).map(|(word, _)| word.to_string()).collect()
}
