//! Sentence segmenter.
//!
//! A sentence ends right after `.`, `?` or `!` when whitespace follows. The
//! delimiter stays with its sentence and the whitespace run is dropped. There
//! is no abbreviation handling, so `"Dr. Smith"` splits after `"Dr."`.

/// Characters that may end a sentence.
pub const DELIMITERS: [char; 3] = ['.', '?', '!'];

/// Lazy iterator over the sentences of a text.
///
/// Blank fragments are skipped. Cloning restarts from the current position.
#[derive(Debug, Clone)]
pub struct Sentences<'a> {
    rest: &'a str,
}

/// Split `text` into sentences.
#[must_use]
pub fn sentences(text: &str) -> Sentences<'_> {
    Sentences { rest: text }
}

impl<'a> Sentences<'a> {
    /// Next raw fragment, blank or not.
    fn next_fragment(&mut self) -> Option<&'a str> {
        if self.rest.is_empty() {
            return None;
        }

        let text = self.rest;
        let mut chars = text.char_indices().peekable();

        while let Some((i, c)) = chars.next() {
            if !DELIMITERS.contains(&c) {
                continue;
            }
            let end = i + c.len_utf8();
            if !chars.peek().is_some_and(|&(_, next)| next.is_whitespace()) {
                continue;
            }

            let after = &text[end..];
            let skipped = after.len() - after.trim_start().len();
            self.rest = &after[skipped..];
            return Some(&text[..end]);
        }

        self.rest = "";
        Some(text)
    }
}

impl<'a> Iterator for Sentences<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(fragment) = self.next_fragment() {
            if !fragment.trim().is_empty() {
                return Some(fragment);
            }
        }
        None
    }
}
