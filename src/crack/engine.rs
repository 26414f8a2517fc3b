//! Key recovery for a hypothesized key length

use super::column::{ColumnScore, score_column, split_columns};
use crate::analysis::ReferenceDistribution;
use crate::cipher::decrypt_sequence;
use crate::core::{Alphabet, CipherError, Ciphertext, Key, Plaintext};
use rayon::prelude::*;

/// Outcome of cracking one key length
#[derive(Debug, Clone, PartialEq)]
pub struct CrackResult {
    /// Hypothesized key length
    pub key_length: usize,
    /// Best-fitting key
    pub key: Key,
    /// Ciphertext decrypted with `key`
    pub plaintext: Plaintext,
    /// Sum of the per-column minimum chi-squared statistics (lower = better)
    pub score: f64,
    /// Per-column detail in key order
    pub columns: Vec<ColumnScore>,
}

impl CrackResult {
    /// Average per-column statistic, comparable across key lengths
    #[must_use]
    pub fn mean_score(&self) -> f64 {
        self.score / self.key_length as f64
    }
}

/// Statistical Vigenère cracker
///
/// Holds an alphabet and a reference distribution already resolved to that
/// alphabet's ordinals, so each crack only does the column work.
#[derive(Debug, Clone)]
pub struct Cracker<'a> {
    alphabet: &'a Alphabet,
    reference: &'a ReferenceDistribution,
    expected: Vec<f64>,
}

impl<'a> Cracker<'a> {
    /// # Errors
    /// Returns `CipherError::InvalidReference` if the reference has no
    /// probability for some alphabet symbol.
    pub fn new(
        alphabet: &'a Alphabet,
        reference: &'a ReferenceDistribution,
    ) -> Result<Self, CipherError> {
        let expected = reference.resolve(alphabet)?;
        Ok(Self {
            alphabet,
            reference,
            expected,
        })
    }

    #[must_use]
    pub const fn alphabet(&self) -> &'a Alphabet {
        self.alphabet
    }

    #[must_use]
    pub const fn reference(&self) -> &'a ReferenceDistribution {
        self.reference
    }

    /// Recover the most probable key of length `key_length`
    ///
    /// Columns are scored in parallel and merged back in column order, so the
    /// key never depends on which worker finishes first.
    ///
    /// # Errors
    /// - `CipherError::InvalidKeyLength` if `key_length` is 0 (checked first)
    /// - `CipherError::EmptyInput` if the ciphertext is empty
    /// - `CipherError::InsufficientData` if some column would be empty
    /// - `CipherError::OutOfAlphabet` if the ciphertext uses another alphabet
    ///
    /// # Examples
    /// ```
    /// use vigenere_cracker::analysis::ENGLISH_TEXT;
    /// use vigenere_cracker::core::{Alphabet, Ciphertext};
    /// use vigenere_cracker::crack::Cracker;
    ///
    /// let alphabet = Alphabet::latin();
    /// let cracker = Cracker::new(&alphabet, &ENGLISH_TEXT).unwrap();
    ///
    /// // "the quick brown fox..." shifted by a one-letter key of 'D'
    /// let cipher = Ciphertext::from_text(
    ///     "WKH TXLFN EURZQ IRA MXPSV RYHU WKH ODCB GRJ DQG WKHQ UHVWV LQ WKH VKDGH RI WKH WUHH",
    ///     &alphabet,
    /// );
    /// let result = cracker.crack_for_length(&cipher, 1).unwrap();
    /// assert_eq!(result.key.to_string(), "D");
    /// ```
    pub fn crack_for_length(
        &self,
        ciphertext: &Ciphertext,
        key_length: usize,
    ) -> Result<CrackResult, CipherError> {
        if key_length == 0 {
            return Err(CipherError::InvalidKeyLength(key_length));
        }
        if ciphertext.is_empty() {
            return Err(CipherError::EmptyInput);
        }
        if key_length > ciphertext.len() {
            return Err(CipherError::InsufficientData {
                key_length,
                available: ciphertext.len(),
            });
        }

        let ordinals = ciphertext.sequence().to_ordinals(self.alphabet)?;
        let columns = split_columns(&ordinals, key_length);

        let columns: Vec<ColumnScore> = columns
            .par_iter()
            .enumerate()
            .map(|(index, column)| score_column(index, column, self.alphabet, &self.expected))
            .collect::<Result<_, _>>()?;

        let shifts: Vec<usize> = columns.iter().map(|column| column.shift).collect();
        let key = Key::from_ordinals(&shifts, self.alphabet)?;
        let plaintext = decrypt_sequence(ciphertext, &key, self.alphabet)?;
        let score = columns.iter().map(|column| column.statistic).sum();

        Ok(CrackResult {
            key_length,
            key,
            plaintext,
            score,
            columns,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{ENGLISH_DICTIONARY, ENGLISH_TEXT};
    use crate::cipher::encrypt_sequence;
    use crate::sources::SAMPLE_TEXT;

    fn encrypt_sample(key: &str, alphabet: &Alphabet) -> (Plaintext, Ciphertext) {
        let plain = Plaintext::from_text(SAMPLE_TEXT, alphabet);
        let key = Key::new(key, alphabet).unwrap();
        let cipher = encrypt_sequence(&plain, &key, alphabet).unwrap();
        (plain, cipher)
    }

    #[test]
    fn sample_is_long_enough() {
        let plain = Plaintext::from_text(SAMPLE_TEXT, &Alphabet::latin());
        assert!(plain.len() >= 2000);
    }

    #[test]
    fn recovers_lock_exactly() {
        let alphabet = Alphabet::latin();
        let (plain, cipher) = encrypt_sample("LOCK", &alphabet);
        let cracker = Cracker::new(&alphabet, &ENGLISH_TEXT).unwrap();

        let result = cracker.crack_for_length(&cipher, 4).unwrap();

        assert_eq!(result.key.to_string(), "LOCK");
        assert_eq!(result.plaintext, plain);
        assert_eq!(result.key_length, 4);
        assert_eq!(result.columns.len(), 4);

        // The correct shift beats all 25 alternatives in every column
        for column in &result.columns {
            let correct = column.shift;
            for (shift, &score) in column.scores.iter().enumerate() {
                if shift != correct {
                    assert!(
                        column.statistic < score,
                        "column {} shift {shift} scored {score} vs {}",
                        column.column,
                        column.statistic
                    );
                }
            }
        }
    }

    #[test]
    fn recovers_with_dictionary_reference() {
        let alphabet = Alphabet::latin();
        let (_, cipher) = encrypt_sample("WORDS", &alphabet);
        let cracker = Cracker::new(&alphabet, &ENGLISH_DICTIONARY).unwrap();

        let result = cracker.crack_for_length(&cipher, 5).unwrap();
        assert_eq!(result.key.to_string(), "WORDS");
    }

    #[test]
    fn score_is_sum_of_column_minima() {
        let alphabet = Alphabet::latin();
        let (_, cipher) = encrypt_sample("LOCK", &alphabet);
        let cracker = Cracker::new(&alphabet, &ENGLISH_TEXT).unwrap();

        let result = cracker.crack_for_length(&cipher, 4).unwrap();
        let sum: f64 = result.columns.iter().map(|c| c.statistic).sum();
        assert!((result.score - sum).abs() < 1e-12);
        assert!((result.mean_score() - sum / 4.0).abs() < 1e-12);

        for column in &result.columns {
            let min = column.scores.iter().copied().fold(f64::INFINITY, f64::min);
            assert!((column.statistic - min).abs() < f64::EPSILON);
        }
    }

    #[test]
    fn repeated_runs_are_identical() {
        let alphabet = Alphabet::latin();
        let (_, cipher) = encrypt_sample("ENIGMA", &alphabet);
        let cracker = Cracker::new(&alphabet, &ENGLISH_TEXT).unwrap();

        let first = cracker.crack_for_length(&cipher, 6).unwrap();
        let second = cracker.crack_for_length(&cipher, 6).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn zero_length_fails_validation() {
        let alphabet = Alphabet::latin();
        let cracker = Cracker::new(&alphabet, &ENGLISH_TEXT).unwrap();

        // Even empty input reports the key length problem first
        let err = cracker
            .crack_for_length(&Ciphertext::default(), 0)
            .unwrap_err();
        assert_eq!(err, CipherError::InvalidKeyLength(0));
        assert!(err.is_validation());
    }

    #[test]
    fn empty_ciphertext_fails() {
        let alphabet = Alphabet::latin();
        let cracker = Cracker::new(&alphabet, &ENGLISH_TEXT).unwrap();
        let cipher = Ciphertext::from_text("1234 -- !!", &alphabet);

        assert_eq!(
            cracker.crack_for_length(&cipher, 3),
            Err(CipherError::EmptyInput)
        );
    }

    #[test]
    fn key_longer_than_ciphertext_fails() {
        let alphabet = Alphabet::latin();
        let cracker = Cracker::new(&alphabet, &ENGLISH_TEXT).unwrap();
        let cipher = Ciphertext::from_text("ABC", &alphabet);

        assert_eq!(
            cracker.crack_for_length(&cipher, 4),
            Err(CipherError::InsufficientData {
                key_length: 4,
                available: 3
            })
        );
        assert!(cracker.crack_for_length(&cipher, 3).is_ok());
    }

    #[test]
    fn reference_must_cover_alphabet() {
        let alphabet = Alphabet::new("ABC!").unwrap();
        assert!(matches!(
            Cracker::new(&alphabet, &ENGLISH_TEXT),
            Err(CipherError::InvalidReference(_))
        ));
    }

    #[test]
    fn reference_must_sum_to_one_over_alphabet() {
        let vowels = Alphabet::new("AEIOU").unwrap();
        assert!(matches!(
            Cracker::new(&vowels, &ENGLISH_TEXT),
            Err(CipherError::InvalidReference(_))
        ));
    }

    #[test]
    fn keyed_alphabet_round_trip() {
        let alphabet = Alphabet::new("KRYPTOSABCDEFGHIJLMNQUVWXZ").unwrap();
        let (plain, cipher) = encrypt_sample("PALIMPSEST", &alphabet);
        let cracker = Cracker::new(&alphabet, &ENGLISH_TEXT).unwrap();

        let result = cracker.crack_for_length(&cipher, 10).unwrap();
        assert_eq!(result.key.to_string(), "PALIMPSEST");
        assert_eq!(result.plaintext, plain);
    }
}
