#![no_main]

use arxiv_lens::search::suggest::suggest_keywords;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|input: (&str, &str)| {
    let (text, query) = input;
    let got = suggest_keywords(text, query, 10);
    assert!(got.len() <= 10);
});
