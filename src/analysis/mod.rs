//! Frequency analysis
//!
//! Empirical letter counts, the built-in English reference tables, and the
//! chi-squared statistic that compares the two.

mod frequency;
mod reference;
mod statistics;

pub use frequency::{FrequencyMap, build_frequency_map};
pub use reference::{ENGLISH_DICTIONARY, ENGLISH_TEXT, ReferenceDistribution, ReferenceKind};
pub use statistics::chi_squared;
