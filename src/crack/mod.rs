//! Vigenère cryptanalysis
//!
//! Recovers a key from ciphertext alone by chi-squared scoring of each
//! key-position column against a reference letter distribution.

mod column;
mod engine;
mod search;

pub use column::{ColumnScore, best_shift, score_column, score_shifts, split_columns};
pub use engine::{CrackResult, Cracker};
pub use search::{KeyLengthSearch, LengthCandidate};

use crate::analysis::ReferenceDistribution;
use crate::core::{Alphabet, CipherError, Ciphertext};

/// Crack raw ciphertext over the Latin alphabet for one key length
///
/// # Errors
/// - `CipherError::InvalidKeyLength` if `key_length` is 0
/// - `CipherError::InvalidReference` if `reference` does not cover A–Z
/// - `CipherError::EmptyInput` / `CipherError::InsufficientData` as for
///   [`Cracker::crack_for_length`]
pub fn crack_for_length(
    ciphertext: &str,
    key_length: usize,
    reference: &ReferenceDistribution,
) -> Result<CrackResult, CipherError> {
    if key_length == 0 {
        return Err(CipherError::InvalidKeyLength(key_length));
    }

    let alphabet = Alphabet::latin();
    let cracker = Cracker::new(&alphabet, reference)?;
    cracker.crack_for_length(&Ciphertext::from_text(ciphertext, &alphabet), key_length)
}
