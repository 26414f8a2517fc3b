//! Crack command
//!
//! Either cracks a single hypothesized key length or searches a range of
//! lengths and reports the winner.

use crate::core::{CipherError, Ciphertext};
use crate::crack::{CrackResult, Cracker, KeyLengthSearch};

/// Configuration for cracking ciphertext
#[derive(Debug, Clone, Copy)]
pub struct CrackConfig {
    /// Fixed key length; `None` searches `1..=max_key_length`
    pub key_length: Option<usize>,
    pub max_key_length: usize,
}

impl Default for CrackConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl CrackConfig {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            key_length: None,
            max_key_length: 12,
        }
    }

    #[must_use]
    pub const fn with_key_length(mut self, key_length: usize) -> Self {
        self.key_length = Some(key_length);
        self
    }

    #[must_use]
    pub const fn with_max_key_length(mut self, max_key_length: usize) -> Self {
        self.max_key_length = max_key_length;
        self
    }
}

/// Result of a crack command
pub struct CrackOutcome {
    /// Symbols of ciphertext after filtering
    pub ciphertext_len: usize,
    /// Present only when the key length was searched
    pub search: Option<KeyLengthSearch>,
    pub result: CrackResult,
}

/// Crack `ciphertext` according to `config`
///
/// # Errors
/// Propagates every error of [`Cracker::crack_for_length`] and
/// [`Cracker::search_key_lengths`].
pub fn run_crack(
    cracker: &Cracker<'_>,
    ciphertext: &Ciphertext,
    config: CrackConfig,
) -> Result<CrackOutcome, CipherError> {
    let ciphertext_len = ciphertext.len();

    if let Some(key_length) = config.key_length {
        let result = cracker.crack_for_length(ciphertext, key_length)?;
        return Ok(CrackOutcome {
            ciphertext_len,
            search: None,
            result,
        });
    }

    let search = cracker.search_key_lengths(ciphertext, config.max_key_length)?;
    let result = search.best().result.clone();

    Ok(CrackOutcome {
        ciphertext_len,
        search: Some(search),
        result,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::ENGLISH_TEXT;
    use crate::cipher::encrypt_text;
    use crate::core::Alphabet;
    use crate::sources::SAMPLE_TEXT;

    fn lock_ciphertext(alphabet: &Alphabet) -> Ciphertext {
        let text = encrypt_text(SAMPLE_TEXT, "LOCK", alphabet).unwrap();
        Ciphertext::from_text(&text, alphabet)
    }

    #[test]
    fn default_config() {
        let config = CrackConfig::default();
        assert_eq!(config.key_length, None);
        assert_eq!(config.max_key_length, 12);

        let config = CrackConfig::new().with_key_length(4).with_max_key_length(6);
        assert_eq!(config.key_length, Some(4));
        assert_eq!(config.max_key_length, 6);
    }

    #[test]
    fn fixed_length_skips_search() {
        let alphabet = Alphabet::latin();
        let cracker = Cracker::new(&alphabet, &ENGLISH_TEXT).unwrap();
        let cipher = lock_ciphertext(&alphabet);

        let outcome = run_crack(&cracker, &cipher, CrackConfig::new().with_key_length(4)).unwrap();
        assert!(outcome.search.is_none());
        assert_eq!(outcome.result.key.to_string(), "LOCK");
        assert_eq!(outcome.ciphertext_len, cipher.len());
    }

    #[test]
    fn search_finds_length() {
        let alphabet = Alphabet::latin();
        let cracker = Cracker::new(&alphabet, &ENGLISH_TEXT).unwrap();
        let cipher = lock_ciphertext(&alphabet);

        let outcome = run_crack(&cracker, &cipher, CrackConfig::new().with_max_key_length(6)).unwrap();
        let search = outcome.search.unwrap();
        assert_eq!(search.candidates().count(), 6);
        assert_eq!(outcome.result.key_length, 4);
        assert_eq!(outcome.result.key.to_string(), "LOCK");
    }

    #[test]
    fn zero_length_is_rejected() {
        let alphabet = Alphabet::latin();
        let cracker = Cracker::new(&alphabet, &ENGLISH_TEXT).unwrap();
        let cipher = lock_ciphertext(&alphabet);

        let err = run_crack(&cracker, &cipher, CrackConfig::new().with_key_length(0))
            .err()
            .unwrap();
        assert!(err.is_validation());
    }
}
