//! Column split and per-column shift scoring
//!
//! With a key of length L, every L-th ciphertext symbol was shifted by the
//! same key symbol. Each column is therefore a Caesar cipher, and the shift
//! that makes it look most like the reference language is the key symbol.

use crate::analysis::{FrequencyMap, chi_squared};
use crate::cipher::unshift_ordinals;
use crate::core::{Alphabet, CipherError};

/// Scoring outcome for one column
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnScore {
    /// Column index (key position)
    pub column: usize,
    /// Number of ciphertext symbols in the column
    pub symbols: usize,
    /// Shift with the lowest statistic
    pub shift: usize,
    /// Chi-squared statistic of `shift`
    pub statistic: f64,
    /// Chi-squared statistic of every shift, indexed by shift
    pub scores: Vec<f64>,
}

impl ColumnScore {
    /// Gap between the best and second-best statistic
    ///
    /// Larger gaps mean the column's key symbol is better supported.
    #[must_use]
    pub fn margin(&self) -> f64 {
        self.scores
            .iter()
            .enumerate()
            .filter(|&(shift, _)| shift != self.shift)
            .map(|(_, &score)| score - self.statistic)
            .min_by(f64::total_cmp)
            .unwrap_or(0.0)
    }
}

/// Partition ordinals by `index mod key_length`
///
/// Column `c` holds the symbols at `c, c + L, c + 2L, ...`. Columns past the
/// end of a short input come back empty.
///
/// # Examples
/// ```
/// use vigenere_cracker::crack::split_columns;
///
/// let columns = split_columns(&[0, 1, 2, 3, 4], 2);
/// assert_eq!(columns, vec![vec![0, 2, 4], vec![1, 3]]);
/// ```
#[must_use]
pub fn split_columns(ordinals: &[usize], key_length: usize) -> Vec<Vec<usize>> {
    let mut columns = vec![Vec::with_capacity(ordinals.len() / key_length.max(1) + 1); key_length];
    for (index, &ordinal) in ordinals.iter().enumerate() {
        columns[index % key_length].push(ordinal);
    }
    columns
}

/// Chi-squared statistic for every candidate shift of one column
///
/// Entry `s` scores the column after Caesar decryption by `s` against the
/// expected probabilities (aligned to the alphabet's ordinals).
///
/// # Errors
/// Returns `CipherError::IndexOutOfRange` if the column holds an ordinal
/// outside the alphabet.
pub fn score_shifts(
    column: &[usize],
    alphabet: &Alphabet,
    expected: &[f64],
) -> Result<Vec<f64>, CipherError> {
    (0..alphabet.len())
        .map(|shift| {
            let decrypted = unshift_ordinals(column, shift, alphabet.len());
            let observed = FrequencyMap::from_ordinals(&decrypted, alphabet)?.normalize();
            Ok(chi_squared(&observed, expected))
        })
        .collect()
}

/// Lowest-scoring shift and its statistic
///
/// Ties go to the smallest shift. Returns `None` for an empty slice.
///
/// # Examples
/// ```
/// use vigenere_cracker::crack::best_shift;
///
/// assert_eq!(best_shift(&[0.9, 0.2, 0.2, 0.5]), Some((1, 0.2)));
/// assert_eq!(best_shift(&[]), None);
/// ```
#[must_use]
pub fn best_shift(scores: &[f64]) -> Option<(usize, f64)> {
    scores
        .iter()
        .copied()
        .enumerate()
        .fold(None, |best, (shift, score)| match best {
            Some((_, best_score)) if score.total_cmp(&best_score).is_ge() => best,
            _ => Some((shift, score)),
        })
}

/// Score all shifts of one column and keep the best
///
/// # Errors
/// - `CipherError::EmptyInput` if the column is empty; there is nothing to
///   score and no shift may be guessed
/// - `CipherError::IndexOutOfRange` from [`score_shifts`]
pub fn score_column(
    index: usize,
    column: &[usize],
    alphabet: &Alphabet,
    expected: &[f64],
) -> Result<ColumnScore, CipherError> {
    if column.is_empty() {
        return Err(CipherError::EmptyInput);
    }

    let scores = score_shifts(column, alphabet, expected)?;
    let (shift, statistic) = best_shift(&scores).ok_or(CipherError::EmptyInput)?;

    Ok(ColumnScore {
        column: index,
        symbols: column.len(),
        shift,
        statistic,
        scores,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::ENGLISH_TEXT;
    use crate::core::SymbolSequence;

    fn expected() -> Vec<f64> {
        ENGLISH_TEXT.resolve(&Alphabet::latin()).unwrap()
    }

    #[test]
    fn split_preserves_every_symbol() {
        let ordinals: Vec<usize> = (0..23).collect();
        let columns = split_columns(&ordinals, 4);

        assert_eq!(columns.len(), 4);
        assert_eq!(columns.iter().map(Vec::len).sum::<usize>(), 23);
        assert_eq!(columns[0], vec![0, 4, 8, 12, 16, 20]);
        assert_eq!(columns[3], vec![3, 7, 11, 15, 19]);
    }

    #[test]
    fn split_short_input_leaves_empty_columns() {
        let columns = split_columns(&[5, 6], 4);
        assert_eq!(columns, vec![vec![5], vec![6], vec![], vec![]]);
    }

    #[test]
    fn best_shift_prefers_smallest_on_ties() {
        assert_eq!(best_shift(&[1.0, 1.0, 1.0]), Some((0, 1.0)));
        assert_eq!(best_shift(&[3.0, 0.5, 2.0, 0.5]), Some((1, 0.5)));
    }

    #[test]
    fn caesar_column_recovers_shift() {
        let alphabet = Alphabet::latin();
        let plain = SymbolSequence::filter(
            "it is a truth universally acknowledged that a single man in possession \
             of a good fortune must be in want of a wife",
            &alphabet,
        );
        let shift = 7;
        let column: Vec<usize> = plain
            .to_ordinals(&alphabet)
            .unwrap()
            .into_iter()
            .map(|o| (o + shift) % 26)
            .collect();

        let score = score_column(0, &column, &alphabet, &expected()).unwrap();
        assert_eq!(score.shift, shift);
        assert_eq!(score.scores.len(), 26);
        assert_eq!(score.symbols, column.len());
        assert!(score.margin() > 0.0);
    }

    #[test]
    fn scoring_is_deterministic() {
        let alphabet = Alphabet::latin();
        let column = SymbolSequence::filter("WKLVLVDWHVWRIWKHVFRULQJ", &alphabet)
            .to_ordinals(&alphabet)
            .unwrap();

        let first = score_column(2, &column, &alphabet, &expected()).unwrap();
        let second = score_column(2, &column, &alphabet, &expected()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn empty_column_is_not_guessed() {
        let alphabet = Alphabet::latin();
        assert_eq!(
            score_column(0, &[], &alphabet, &expected()),
            Err(CipherError::EmptyInput)
        );
    }

    #[test]
    fn margin_of_single_best() {
        let score = ColumnScore {
            column: 0,
            symbols: 3,
            shift: 2,
            statistic: 0.1,
            scores: vec![0.5, 0.4, 0.1],
        };
        assert!((score.margin() - 0.3).abs() < 1e-12);
    }
}
