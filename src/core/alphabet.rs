//! Alphabet codec
//!
//! Maps symbols to ordinals `0..N` and back, and defines the modular base N
//! used by the cipher arithmetic.

use super::CipherError;
use rustc_hash::FxHashMap;
use std::fmt;

/// The 26 Latin letters in order
pub const LATIN: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Fold a symbol to upper case when it has a single-character upper-case form
#[inline]
#[must_use]
pub fn fold(symbol: char) -> char {
    let mut upper = symbol.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(folded), None) => folded,
        _ => symbol,
    }
}

/// An ordered set of unique symbols
///
/// Symbols are case-folded on construction, so `"abc"` and `"ABC"` build the
/// same alphabet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    symbols: Vec<char>,
    ordinals: FxHashMap<char, usize>,
}

impl Alphabet {
    /// Build an alphabet from its symbols in ordinal order
    ///
    /// # Errors
    /// Returns `CipherError::InvalidAlphabet` if there are fewer than two
    /// symbols or a symbol repeats (after case folding).
    ///
    /// # Examples
    /// ```
    /// use vigenere_cracker::core::Alphabet;
    ///
    /// let alphabet = Alphabet::new("KRYPTOSABCDEFGHIJLMNQUVWXZ").unwrap();
    /// assert_eq!(alphabet.index_of('K').unwrap(), 0);
    ///
    /// assert!(Alphabet::new("A").is_err());
    /// assert!(Alphabet::new("ABA").is_err());
    /// ```
    pub fn new(symbols: &str) -> Result<Self, CipherError> {
        let symbols: Vec<char> = symbols.chars().map(fold).collect();

        if symbols.len() < 2 {
            return Err(CipherError::InvalidAlphabet(format!(
                "needs at least 2 symbols, got {}",
                symbols.len()
            )));
        }

        let mut ordinals = FxHashMap::default();
        for (ordinal, &symbol) in symbols.iter().enumerate() {
            if ordinals.insert(symbol, ordinal).is_some() {
                return Err(CipherError::InvalidAlphabet(format!(
                    "duplicate symbol '{symbol}'"
                )));
            }
        }

        Ok(Self { symbols, ordinals })
    }

    /// The default 26-letter Latin alphabet
    #[must_use]
    pub fn latin() -> Self {
        let symbols: Vec<char> = LATIN.chars().collect();
        let ordinals = symbols
            .iter()
            .enumerate()
            .map(|(ordinal, &symbol)| (symbol, ordinal))
            .collect();
        Self { symbols, ordinals }
    }

    /// Number of symbols (the modular base)
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Always false: construction rejects alphabets under two symbols
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Symbols in ordinal order
    #[inline]
    #[must_use]
    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }

    /// Check membership of a symbol (case-folded)
    #[inline]
    #[must_use]
    pub fn contains(&self, symbol: char) -> bool {
        self.ordinals.contains_key(&fold(symbol))
    }

    /// Ordinal of a symbol
    ///
    /// # Errors
    /// Returns `CipherError::OutOfAlphabet` if the symbol is not a member.
    #[inline]
    pub fn index_of(&self, symbol: char) -> Result<usize, CipherError> {
        self.ordinals
            .get(&fold(symbol))
            .copied()
            .ok_or(CipherError::OutOfAlphabet(symbol))
    }

    /// Symbol at an ordinal
    ///
    /// # Errors
    /// Returns `CipherError::IndexOutOfRange` if `ordinal >= len()`.
    #[inline]
    pub fn symbol_at(&self, ordinal: usize) -> Result<char, CipherError> {
        self.symbols
            .get(ordinal)
            .copied()
            .ok_or(CipherError::IndexOutOfRange {
                index: ordinal,
                len: self.len(),
            })
    }

    /// Reduce any integer into `0..len()`, negative values included
    ///
    /// # Examples
    /// ```
    /// use vigenere_cracker::core::Alphabet;
    ///
    /// let alphabet = Alphabet::latin();
    /// assert_eq!(alphabet.modulo(27), 1);
    /// assert_eq!(alphabet.modulo(-1), 25);
    /// ```
    #[inline]
    #[must_use]
    pub fn modulo(&self, value: i64) -> usize {
        value.rem_euclid(self.symbols.len() as i64) as usize
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::latin()
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for symbol in &self.symbols {
            write!(f, "{symbol}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latin_matches_constructed() {
        assert_eq!(Alphabet::latin(), Alphabet::new(LATIN).unwrap());
        assert_eq!(Alphabet::latin().len(), 26);
    }

    #[test]
    fn lowercase_symbols_are_folded() {
        let alphabet = Alphabet::new("abc").unwrap();
        assert_eq!(alphabet.symbols(), &['A', 'B', 'C']);
        assert_eq!(alphabet.index_of('b').unwrap(), 1);
        assert_eq!(alphabet.index_of('B').unwrap(), 1);
    }

    #[test]
    fn rejects_short_alphabets() {
        assert!(matches!(
            Alphabet::new(""),
            Err(CipherError::InvalidAlphabet(_))
        ));
        assert!(matches!(
            Alphabet::new("Q"),
            Err(CipherError::InvalidAlphabet(_))
        ));
        assert!(Alphabet::new("XY").is_ok());
    }

    #[test]
    fn rejects_duplicates_after_folding() {
        assert!(matches!(
            Alphabet::new("aA"),
            Err(CipherError::InvalidAlphabet(_))
        ));
    }

    #[test]
    fn index_of_unknown_symbol() {
        let alphabet = Alphabet::latin();
        assert_eq!(alphabet.index_of('3'), Err(CipherError::OutOfAlphabet('3')));
        assert_eq!(alphabet.index_of(' '), Err(CipherError::OutOfAlphabet(' ')));
    }

    #[test]
    fn symbol_at_bounds() {
        let alphabet = Alphabet::latin();
        assert_eq!(alphabet.symbol_at(0).unwrap(), 'A');
        assert_eq!(alphabet.symbol_at(25).unwrap(), 'Z');
        assert_eq!(
            alphabet.symbol_at(26),
            Err(CipherError::IndexOutOfRange { index: 26, len: 26 })
        );
    }

    #[test]
    fn modulo_handles_negatives() {
        let alphabet = Alphabet::latin();
        assert_eq!(alphabet.modulo(0), 0);
        assert_eq!(alphabet.modulo(25), 25);
        assert_eq!(alphabet.modulo(26), 0);
        assert_eq!(alphabet.modulo(-26), 0);
        assert_eq!(alphabet.modulo(-27), 25);
        assert_eq!(alphabet.modulo(i64::from(u8::MAX)), 255 % 26);
    }

    #[test]
    fn ordinals_round_trip() {
        let alphabet = Alphabet::new("KRYPTOS").unwrap();
        for (ordinal, &symbol) in alphabet.symbols().iter().enumerate() {
            assert_eq!(alphabet.index_of(symbol).unwrap(), ordinal);
            assert_eq!(alphabet.symbol_at(ordinal).unwrap(), symbol);
        }
    }

    #[test]
    fn display_lists_symbols() {
        assert_eq!(Alphabet::new("xyz").unwrap().to_string(), "XYZ");
    }
}
