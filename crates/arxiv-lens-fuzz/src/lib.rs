//! Fuzzing library for arxiv-lens.
//!
//! Targets cover the hand-written Atom parser and the two text stages that
//! see raw user input: the sentence segmenter and the keyword suggester.
//!
//! # Usage
//!
//! ```bash
//! cd crates/arxiv-lens-fuzz
//! cargo +nightly fuzz run fuzz_atom_feed -- -max_total_time=60
//! ```

pub use arxiv_lens::client::atom;
pub use arxiv_lens::search::suggest;
pub use arxiv_lens::translate::segment;
