//! Embedded sample corpus
//!
//! English prose compiled into the binary, used as default input and as the
//! plaintext for benchmarks and tests.

/// Sample English text (about 3,700 letters after filtering)
pub const SAMPLE_TEXT: &str = include_str!("../../data/sample_english.txt");
