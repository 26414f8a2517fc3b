//! Frequency analysis command
//!
//! Counts the letters of a text and measures how English-like it looks.

use crate::analysis::{FrequencyMap, ReferenceDistribution, chi_squared};
use crate::core::{Alphabet, CipherError, SymbolSequence};

/// Result of analyzing a text
pub struct AnalysisResult {
    pub source: String,
    pub map: FrequencyMap,
    /// Chi-squared fit of the unshifted text against the reference
    pub fit: f64,
    pub reference: String,
}

/// Build the frequency table of `text` and score it against `reference`
///
/// # Errors
/// Returns `CipherError::InvalidReference` if the reference does not cover
/// the alphabet.
pub fn analyze_text(
    text: &str,
    source: &str,
    alphabet: &Alphabet,
    reference: &ReferenceDistribution,
) -> Result<AnalysisResult, CipherError> {
    let expected = reference.resolve(alphabet)?;
    let sequence = SymbolSequence::filter(text, alphabet);
    let map = FrequencyMap::build(&sequence, alphabet)?;
    let fit = chi_squared(&map.normalize(), &expected);

    Ok(AnalysisResult {
        source: source.to_string(),
        map,
        fit,
        reference: reference.name().to_string(),
    })
}
