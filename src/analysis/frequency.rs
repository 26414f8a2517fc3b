//! Letter frequency tables
//!
//! Counts live in a fixed array indexed by ordinal, so updates are O(1) and
//! there is no ordering ambiguity. Sorting happens only when a report asks
//! for it.

use crate::core::{Alphabet, CipherError, SymbolSequence};

/// Per-symbol occurrence counts over one alphabet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyMap {
    symbols: Vec<char>,
    counts: Vec<usize>,
    total: usize,
}

impl FrequencyMap {
    /// Count every symbol of a filtered sequence
    ///
    /// # Errors
    /// Returns `CipherError::OutOfAlphabet` if the sequence was filtered
    /// against a different alphabet.
    ///
    /// # Examples
    /// ```
    /// use vigenere_cracker::analysis::FrequencyMap;
    /// use vigenere_cracker::core::{Alphabet, SymbolSequence};
    ///
    /// let alphabet = Alphabet::latin();
    /// let sequence = SymbolSequence::filter("Mississippi", &alphabet);
    /// let map = FrequencyMap::build(&sequence, &alphabet).unwrap();
    ///
    /// assert_eq!(map.count('S').unwrap(), 4);
    /// assert_eq!(map.total(), 11);
    /// ```
    pub fn build(sequence: &SymbolSequence, alphabet: &Alphabet) -> Result<Self, CipherError> {
        let mut counts = vec![0; alphabet.len()];
        for &symbol in sequence.symbols() {
            counts[alphabet.index_of(symbol)?] += 1;
        }

        Ok(Self {
            symbols: alphabet.symbols().to_vec(),
            counts,
            total: sequence.len(),
        })
    }

    /// Count raw ordinals
    ///
    /// # Errors
    /// Returns `CipherError::IndexOutOfRange` for an ordinal outside the alphabet.
    pub fn from_ordinals(ordinals: &[usize], alphabet: &Alphabet) -> Result<Self, CipherError> {
        let mut counts = vec![0; alphabet.len()];
        for &ordinal in ordinals {
            let slot = counts
                .get_mut(ordinal)
                .ok_or(CipherError::IndexOutOfRange {
                    index: ordinal,
                    len: alphabet.len(),
                })?;
            *slot += 1;
        }

        Ok(Self {
            symbols: alphabet.symbols().to_vec(),
            counts,
            total: ordinals.len(),
        })
    }

    /// Number of symbols counted
    #[inline]
    #[must_use]
    pub const fn total(&self) -> usize {
        self.total
    }

    /// Counts in ordinal order, one slot per alphabet symbol
    #[inline]
    #[must_use]
    pub fn counts(&self) -> &[usize] {
        &self.counts
    }

    /// Count for one symbol
    ///
    /// # Errors
    /// Returns `CipherError::OutOfAlphabet` if the symbol is not in the table.
    pub fn count(&self, symbol: char) -> Result<usize, CipherError> {
        self.symbols
            .iter()
            .position(|&s| s == crate::core::alphabet::fold(symbol))
            .map(|ordinal| self.counts[ordinal])
            .ok_or(CipherError::OutOfAlphabet(symbol))
    }

    /// Symbols with a non-zero count, in ordinal order
    pub fn observed(&self) -> impl Iterator<Item = (char, usize)> + '_ {
        self.symbols
            .iter()
            .copied()
            .zip(self.counts.iter().copied())
            .filter(|&(_, count)| count > 0)
    }

    /// Probability of each symbol in ordinal order
    ///
    /// An empty table normalizes to all zeros rather than dividing by zero.
    #[must_use]
    pub fn normalize(&self) -> Vec<f64> {
        if self.total == 0 {
            return vec![0.0; self.counts.len()];
        }

        let total = self.total as f64;
        self.counts
            .iter()
            .map(|&count| count as f64 / total)
            .collect()
    }

    /// Share of the total as a percentage, 0 for an empty table
    #[must_use]
    pub fn percentage(&self, count: usize) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            count as f64 / self.total as f64 * 100.0
        }
    }

    /// Observed symbols by descending count, ties in ordinal order
    ///
    /// # Examples
    /// ```
    /// use vigenere_cracker::analysis::build_frequency_map;
    /// use vigenere_cracker::core::Alphabet;
    ///
    /// let map = build_frequency_map("banana", &Alphabet::latin()).unwrap();
    /// assert_eq!(map.sorted_descending(), vec![('A', 3), ('N', 2), ('B', 1)]);
    /// ```
    #[must_use]
    pub fn sorted_descending(&self) -> Vec<(char, usize)> {
        let mut entries: Vec<(char, usize)> = self.observed().collect();
        // Stable sort keeps ordinal order among equal counts
        entries.sort_by(|(_, a), (_, b)| b.cmp(a));
        entries
    }
}

/// Filter raw text to the alphabet and count it
///
/// # Errors
/// Never fails for text filtered against `alphabet`; the `Result` mirrors
/// [`FrequencyMap::build`].
pub fn build_frequency_map(text: &str, alphabet: &Alphabet) -> Result<FrequencyMap, CipherError> {
    FrequencyMap::build(&SymbolSequence::filter(text, alphabet), alphabet)
}
