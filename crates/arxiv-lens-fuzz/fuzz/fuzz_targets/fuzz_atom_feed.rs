#![no_main]

use arxiv_lens::client::atom;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Arbitrary feed bodies must parse or fail, never panic
    if let Ok(xml) = std::str::from_utf8(data) {
        let _ = atom::parse_feed(xml);
        let _ = atom::error_message(xml);
    }
});
