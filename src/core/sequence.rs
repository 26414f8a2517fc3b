//! Filtered symbol sequences and their plaintext/ciphertext tags
//!
//! Raw input is case-folded and stripped of everything outside the alphabet
//! exactly once, here. Downstream code never sees an unknown symbol.

use super::{Alphabet, CipherError, alphabet::fold};
use std::fmt;

/// An ordered run of symbols, all members of one alphabet
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct SymbolSequence {
    symbols: Vec<char>,
}

impl SymbolSequence {
    /// Keep only the alphabet members of `text`, case-folded
    ///
    /// Whitespace, punctuation and digits are dropped and cannot be recovered.
    ///
    /// # Examples
    /// ```
    /// use vigenere_cracker::core::{Alphabet, SymbolSequence};
    ///
    /// let sequence = SymbolSequence::filter("Hello, World! 42", &Alphabet::latin());
    /// assert_eq!(sequence.to_string(), "HELLOWORLD");
    /// ```
    #[must_use]
    pub fn filter(text: &str, alphabet: &Alphabet) -> Self {
        let symbols = text
            .chars()
            .map(fold)
            .filter(|&symbol| alphabet.contains(symbol))
            .collect();
        Self { symbols }
    }

    /// Rebuild a sequence from ordinals
    ///
    /// # Errors
    /// Returns `CipherError::IndexOutOfRange` for any ordinal `>= alphabet.len()`.
    pub fn from_ordinals(ordinals: &[usize], alphabet: &Alphabet) -> Result<Self, CipherError> {
        let symbols = ordinals
            .iter()
            .map(|&ordinal| alphabet.symbol_at(ordinal))
            .collect::<Result<_, _>>()?;
        Ok(Self { symbols })
    }

    /// Ordinal of every symbol
    ///
    /// # Errors
    /// Returns `CipherError::OutOfAlphabet` if the sequence was filtered
    /// against a different alphabet.
    pub fn to_ordinals(&self, alphabet: &Alphabet) -> Result<Vec<usize>, CipherError> {
        self.symbols
            .iter()
            .map(|&symbol| alphabet.index_of(symbol))
            .collect()
    }

    #[inline]
    #[must_use]
    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

impl fmt::Display for SymbolSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for symbol in &self.symbols {
            write!(f, "{symbol}")?;
        }
        Ok(())
    }
}

impl FromIterator<char> for SymbolSequence {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        Self {
            symbols: iter.into_iter().collect(),
        }
    }
}

macro_rules! tagged_sequence {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
        pub struct $name(SymbolSequence);

        impl $name {
            #[must_use]
            pub const fn new(sequence: SymbolSequence) -> Self {
                Self(sequence)
            }

            /// Filter raw text into this sequence kind
            #[must_use]
            pub fn from_text(text: &str, alphabet: &Alphabet) -> Self {
                Self(SymbolSequence::filter(text, alphabet))
            }

            #[inline]
            #[must_use]
            pub const fn sequence(&self) -> &SymbolSequence {
                &self.0
            }

            #[must_use]
            pub fn into_sequence(self) -> SymbolSequence {
                self.0
            }

            #[inline]
            #[must_use]
            pub fn len(&self) -> usize {
                self.0.len()
            }

            #[inline]
            #[must_use]
            pub fn is_empty(&self) -> bool {
                self.0.is_empty()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::Display::fmt(&self.0, f)
            }
        }
    };
}

tagged_sequence!(
    /// A symbol sequence that is known to be plaintext
    Plaintext
);

tagged_sequence!(
    /// A symbol sequence that is known to be ciphertext
    Ciphertext
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_drops_non_members() {
        let alphabet = Alphabet::latin();
        let sequence = SymbolSequence::filter("a-b c\td\n1e!", &alphabet);
        assert_eq!(sequence.to_string(), "ABCDE");
        assert_eq!(sequence.len(), 5);
    }

    #[test]
    fn filter_is_idempotent() {
        let alphabet = Alphabet::latin();
        let once = SymbolSequence::filter("The quick brown fox, 1899.", &alphabet);
        let twice = SymbolSequence::filter(&once.to_string(), &alphabet);
        assert_eq!(once, twice);
    }

    #[test]
    fn filter_respects_custom_alphabet() {
        let alphabet = Alphabet::new("ACGT").unwrap();
        let sequence = SymbolSequence::filter("acgtn-ACGTX", &alphabet);
        assert_eq!(sequence.to_string(), "ACGTACGT");
    }

    #[test]
    fn filter_empty_and_all_removed() {
        let alphabet = Alphabet::latin();
        assert!(SymbolSequence::filter("", &alphabet).is_empty());
        assert!(SymbolSequence::filter("123 !?", &alphabet).is_empty());
    }

    #[test]
    fn ordinals_round_trip() {
        let alphabet = Alphabet::latin();
        let sequence = SymbolSequence::filter("ZEBRA", &alphabet);
        let ordinals = sequence.to_ordinals(&alphabet).unwrap();
        assert_eq!(ordinals, vec![25, 4, 1, 17, 0]);
        assert_eq!(
            SymbolSequence::from_ordinals(&ordinals, &alphabet).unwrap(),
            sequence
        );
    }

    #[test]
    fn from_ordinals_out_of_range() {
        let alphabet = Alphabet::new("AB").unwrap();
        assert_eq!(
            SymbolSequence::from_ordinals(&[0, 2], &alphabet),
            Err(CipherError::IndexOutOfRange { index: 2, len: 2 })
        );
    }

    #[test]
    fn to_ordinals_foreign_alphabet() {
        let latin = Alphabet::latin();
        let dna = Alphabet::new("ACGT").unwrap();
        let sequence = SymbolSequence::filter("CAB", &latin);
        assert_eq!(
            sequence.to_ordinals(&dna),
            Err(CipherError::OutOfAlphabet('B'))
        );
    }

    #[test]
    fn tagged_sequences_share_display() {
        let alphabet = Alphabet::latin();
        let plain = Plaintext::from_text("attack at dawn", &alphabet);
        let cipher = Ciphertext::new(plain.sequence().clone());
        assert_eq!(plain.to_string(), "ATTACKATDAWN");
        assert_eq!(cipher.to_string(), plain.to_string());
        assert_eq!(cipher.len(), 12);
    }
}
