//! Key-length discovery
//!
//! Cracks every length in `1..=max_length` and ranks them by the mean
//! per-column statistic. The sum alone would favour short keys, since every
//! extra column adds its own statistic.

use super::engine::{CrackResult, Cracker};
use crate::core::{CipherError, Ciphertext};
use rayon::prelude::*;
use std::cmp::Ordering;

/// One evaluated key length
#[derive(Debug, Clone, PartialEq)]
pub struct LengthCandidate {
    pub key_length: usize,
    /// `result.score / key_length`
    pub mean_score: f64,
    pub result: CrackResult,
}

impl LengthCandidate {
    fn new(result: CrackResult) -> Self {
        Self {
            key_length: result.key_length,
            mean_score: result.mean_score(),
            result,
        }
    }

    /// Ascending mean score, shorter key on ties
    fn rank(&self, other: &Self) -> Ordering {
        self.mean_score
            .total_cmp(&other.mean_score)
            .then(self.key_length.cmp(&other.key_length))
    }
}

/// Ranked outcome of a key-length search
///
/// Always holds at least one candidate: a non-empty ciphertext can be
/// cracked with a one-symbol key.
#[derive(Debug, Clone, PartialEq)]
pub struct KeyLengthSearch {
    best: LengthCandidate,
    /// Remaining candidates in rank order
    rest: Vec<LengthCandidate>,
    skipped: Vec<usize>,
}

impl KeyLengthSearch {
    /// Best-scoring length
    #[must_use]
    pub const fn best(&self) -> &LengthCandidate {
        &self.best
    }

    /// Consume the search, keeping only the winner
    #[must_use]
    pub fn into_best(self) -> LengthCandidate {
        self.best
    }

    /// Every evaluated length, best first
    pub fn candidates(&self) -> impl Iterator<Item = &LengthCandidate> {
        std::iter::once(&self.best).chain(&self.rest)
    }

    /// Lengths longer than the ciphertext, which would leave a column empty
    #[must_use]
    pub fn skipped(&self) -> &[usize] {
        &self.skipped
    }
}

impl Cracker<'_> {
    /// Try every key length up to `max_length` and rank the results
    ///
    /// Lengths are evaluated in parallel; the ranking compares computed
    /// scores only, so the outcome is the same on every run. Lengths beyond
    /// the ciphertext length are skipped rather than failing the search.
    ///
    /// # Errors
    /// - `CipherError::InvalidKeyLength` if `max_length` is 0
    /// - `CipherError::EmptyInput` if the ciphertext is empty
    /// - anything else [`Cracker::crack_for_length`] reports
    pub fn search_key_lengths(
        &self,
        ciphertext: &Ciphertext,
        max_length: usize,
    ) -> Result<KeyLengthSearch, CipherError> {
        if max_length == 0 {
            return Err(CipherError::InvalidKeyLength(max_length));
        }
        if ciphertext.is_empty() {
            return Err(CipherError::EmptyInput);
        }

        let evaluable = max_length.min(ciphertext.len());
        let skipped: Vec<usize> = (evaluable + 1..=max_length).collect();

        let single = LengthCandidate::new(self.crack_for_length(ciphertext, 1)?);
        let longer: Vec<LengthCandidate> = (2..=evaluable)
            .into_par_iter()
            .map(|key_length| {
                self.crack_for_length(ciphertext, key_length)
                    .map(LengthCandidate::new)
            })
            .collect::<Result<_, _>>()?;

        let (best, mut rest) =
            longer
                .into_iter()
                .fold((single, Vec::new()), |(best, mut rest), candidate| {
                    if candidate.rank(&best).is_lt() {
                        rest.push(best);
                        (candidate, rest)
                    } else {
                        rest.push(candidate);
                        (best, rest)
                    }
                });
        rest.sort_by(LengthCandidate::rank);

        Ok(KeyLengthSearch {
            best,
            rest,
            skipped,
        })
    }
}
