#![no_main]

use arxiv_lens::translate::segment::sentences;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|text: &str| {
    for sentence in sentences(text) {
        assert!(!sentence.trim().is_empty());
    }
});
