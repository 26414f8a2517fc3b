//! Cipher keys and key-stream expansion
//!
//! The key schedule is plain repetition: `stream[i] = key[i mod len(key)]`.
//! No whitening and no chaining between positions, which is exactly what
//! column-wise frequency analysis exploits.

use super::{Alphabet, CipherError, alphabet::fold};
use std::fmt;

/// A non-empty sequence of alphabet symbols
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Key {
    symbols: Vec<char>,
}

impl Key {
    /// Parse a key, case-folding every symbol
    ///
    /// # Errors
    /// - `CipherError::EmptyKey` if `text` is empty
    /// - `CipherError::OutOfAlphabet` if a symbol is not in the alphabet
    ///
    /// # Examples
    /// ```
    /// use vigenere_cracker::core::{Alphabet, Key};
    ///
    /// let alphabet = Alphabet::latin();
    /// let key = Key::new("lock", &alphabet).unwrap();
    /// assert_eq!(key.to_string(), "LOCK");
    ///
    /// assert!(Key::new("", &alphabet).is_err());
    /// assert!(Key::new("l0ck", &alphabet).is_err());
    /// ```
    pub fn new(text: &str, alphabet: &Alphabet) -> Result<Self, CipherError> {
        let symbols: Vec<char> = text.chars().map(fold).collect();

        if symbols.is_empty() {
            return Err(CipherError::EmptyKey);
        }

        if let Some(&stray) = symbols.iter().find(|&&symbol| !alphabet.contains(symbol)) {
            return Err(CipherError::OutOfAlphabet(stray));
        }

        Ok(Self { symbols })
    }

    /// Build a key from ordinals, e.g. the shifts picked by the cracker
    ///
    /// # Errors
    /// - `CipherError::EmptyKey` if `ordinals` is empty
    /// - `CipherError::IndexOutOfRange` for an ordinal outside the alphabet
    pub fn from_ordinals(ordinals: &[usize], alphabet: &Alphabet) -> Result<Self, CipherError> {
        if ordinals.is_empty() {
            return Err(CipherError::EmptyKey);
        }

        let symbols = ordinals
            .iter()
            .map(|&ordinal| alphabet.symbol_at(ordinal))
            .collect::<Result<_, _>>()?;

        Ok(Self { symbols })
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

    /// Always false: keys are non-empty by construction
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Ordinal of each key symbol
    ///
    /// # Errors
    /// Returns `CipherError::OutOfAlphabet` if the key was parsed against a
    /// different alphabet.
    pub fn ordinals(&self, alphabet: &Alphabet) -> Result<Vec<usize>, CipherError> {
        self.symbols
            .iter()
            .map(|&symbol| alphabet.index_of(symbol))
            .collect()
    }

    /// Key stream over this key's ordinals
    ///
    /// # Errors
    /// Propagates `CipherError::OutOfAlphabet` from [`Key::ordinals`].
    pub fn stream(&self, alphabet: &Alphabet) -> Result<KeyStream, CipherError> {
        KeyStream::new(self.ordinals(alphabet)?)
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for symbol in &self.symbols {
            write!(f, "{symbol}")?;
        }
        Ok(())
    }
}

/// Endless repetition of a key's ordinals
///
/// # Examples
/// ```
/// use vigenere_cracker::core::KeyStream;
///
/// let stream = KeyStream::new(vec![0, 1]).unwrap();
/// assert_eq!(stream.expand(5), vec![0, 1, 0, 1, 0]);
/// ```
#[derive(Debug, Clone)]
pub struct KeyStream {
    ordinals: Vec<usize>,
    position: usize,
}

impl KeyStream {
    /// # Errors
    /// Returns `CipherError::EmptyKey` if `ordinals` is empty.
    pub fn new(ordinals: Vec<usize>) -> Result<Self, CipherError> {
        if ordinals.is_empty() {
            return Err(CipherError::EmptyKey);
        }
        Ok(Self {
            ordinals,
            position: 0,
        })
    }

    /// Exactly `target_length` stream values, starting from position 0
    #[must_use]
    pub fn expand(&self, target_length: usize) -> Vec<usize> {
        (0..target_length)
            .map(|i| self.ordinals[i % self.ordinals.len()])
            .collect()
    }

    #[inline]
    #[must_use]
    pub fn period(&self) -> usize {
        self.ordinals.len()
    }
}

impl Iterator for KeyStream {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        let value = self.ordinals[self.position];
        self.position = (self.position + 1) % self.ordinals.len();
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_parsing_folds_case() {
        let alphabet = Alphabet::latin();
        let key = Key::new("LoCk", &alphabet).unwrap();
        assert_eq!(key.symbols(), &['L', 'O', 'C', 'K']);
        assert_eq!(key.len(), 4);
    }

    #[test]
    fn empty_key_rejected() {
        let alphabet = Alphabet::latin();
        assert_eq!(Key::new("", &alphabet), Err(CipherError::EmptyKey));
        assert_eq!(
            Key::from_ordinals(&[], &alphabet),
            Err(CipherError::EmptyKey)
        );
        assert!(matches!(KeyStream::new(vec![]), Err(CipherError::EmptyKey)));
    }

    #[test]
    fn key_symbol_outside_alphabet() {
        let alphabet = Alphabet::latin();
        assert_eq!(
            Key::new("two words", &alphabet),
            Err(CipherError::OutOfAlphabet(' '))
        );
    }

    #[test]
    fn key_from_ordinals() {
        let alphabet = Alphabet::latin();
        let key = Key::from_ordinals(&[11, 14, 2, 10], &alphabet).unwrap();
        assert_eq!(key.to_string(), "LOCK");
        assert_eq!(key.ordinals(&alphabet).unwrap(), vec![11, 14, 2, 10]);
    }

    #[test]
    fn expand_repeats_single_cycle() {
        let stream = KeyStream::new(vec![3, 1, 4]).unwrap();
        assert_eq!(stream.expand(0), Vec::<usize>::new());
        assert_eq!(stream.expand(2), vec![3, 1]);
        assert_eq!(stream.expand(7), vec![3, 1, 4, 3, 1, 4, 3]);
        assert_eq!(stream.period(), 3);
    }

    #[test]
    fn iterator_matches_expand() {
        let alphabet = Alphabet::latin();
        let key = Key::new("AB", &alphabet).unwrap();
        let stream = key.stream(&alphabet).unwrap();
        let expanded = stream.expand(10);
        let iterated: Vec<usize> = stream.take(10).collect();
        assert_eq!(expanded, iterated);
        assert_eq!(iterated, vec![0, 1, 0, 1, 0, 1, 0, 1, 0, 1]);
    }

    #[test]
    fn single_symbol_key_is_constant() {
        let stream = KeyStream::new(vec![7]).unwrap();
        assert!(stream.expand(50).iter().all(|&v| v == 7));
    }
}
