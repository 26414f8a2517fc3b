//! Reference letter distributions
//!
//! The built-in English tables are generated from `data/` at build time and
//! live in immutable statics, shared read-only by every analysis.

use crate::core::{Alphabet, CipherError, alphabet::fold};
use std::borrow::Cow;

mod generated {
    include!(concat!(env!("OUT_DIR"), "/reference_tables.rs"));
}

/// Tolerance on the sum of a distribution's probabilities
const SUM_TOLERANCE: f64 = 0.05;

/// Expected probability of each symbol in the target language
#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceDistribution {
    name: Cow<'static, str>,
    entries: Cow<'static, [(char, f64)]>,
}

/// English letter frequencies in running text
pub static ENGLISH_TEXT: ReferenceDistribution =
    ReferenceDistribution::from_static("english-text", generated::ENGLISH_TEXT);

/// English letter frequencies across dictionary headwords
pub static ENGLISH_DICTIONARY: ReferenceDistribution =
    ReferenceDistribution::from_static("english-dictionary", generated::ENGLISH_DICTIONARY);

impl ReferenceDistribution {
    const fn from_static(name: &'static str, entries: &'static [(char, f64)]) -> Self {
        Self {
            name: Cow::Borrowed(name),
            entries: Cow::Borrowed(entries),
        }
    }

    /// Build a custom distribution
    ///
    /// # Errors
    /// Returns `CipherError::InvalidReference` if the table is empty, repeats
    /// a symbol, has a probability outside (0, 1), or does not sum to ~1.0.
    ///
    /// # Examples
    /// ```
    /// use vigenere_cracker::analysis::ReferenceDistribution;
    ///
    /// let coin = ReferenceDistribution::new("coin", vec![('H', 0.5), ('T', 0.5)]).unwrap();
    /// assert_eq!(coin.probability('h'), Some(0.5));
    ///
    /// assert!(ReferenceDistribution::new("bad", vec![('H', 0.9), ('T', 0.9)]).is_err());
    /// ```
    pub fn new(name: impl Into<String>, entries: Vec<(char, f64)>) -> Result<Self, CipherError> {
        if entries.is_empty() {
            return Err(CipherError::InvalidReference("no entries".to_string()));
        }

        let entries: Vec<(char, f64)> = entries
            .into_iter()
            .map(|(symbol, probability)| (fold(symbol), probability))
            .collect();

        for (i, &(symbol, probability)) in entries.iter().enumerate() {
            if !(probability > 0.0 && probability < 1.0) {
                return Err(CipherError::InvalidReference(format!(
                    "probability of '{symbol}' is {probability}, expected (0, 1)"
                )));
            }
            if entries[..i].iter().any(|&(seen, _)| seen == symbol) {
                return Err(CipherError::InvalidReference(format!(
                    "duplicate symbol '{symbol}'"
                )));
            }
        }

        let sum: f64 = entries.iter().map(|&(_, p)| p).sum();
        if (sum - 1.0).abs() > SUM_TOLERANCE {
            return Err(CipherError::InvalidReference(format!(
                "probabilities sum to {sum:.4}"
            )));
        }

        Ok(Self {
            name: Cow::Owned(name.into()),
            entries: Cow::Owned(entries),
        })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn entries(&self) -> &[(char, f64)] {
        &self.entries
    }

    /// Probability of a symbol, if the table covers it
    #[must_use]
    pub fn probability(&self, symbol: char) -> Option<f64> {
        let symbol = fold(symbol);
        self.entries
            .iter()
            .find(|&&(s, _)| s == symbol)
            .map(|&(_, p)| p)
    }

    /// Probabilities aligned to an alphabet's ordinals
    ///
    /// # Errors
    /// Returns `CipherError::InvalidReference` if an alphabet symbol has no
    /// entry, or if the probabilities the alphabet selects do not sum to ~1.0
    /// (the alphabet covers only part of the table).
    pub fn resolve(&self, alphabet: &Alphabet) -> Result<Vec<f64>, CipherError> {
        let probabilities = alphabet
            .symbols()
            .iter()
            .map(|&symbol| {
                self.probability(symbol).ok_or_else(|| {
                    CipherError::InvalidReference(format!(
                        "'{}' has no probability for symbol '{symbol}'",
                        self.name
                    ))
                })
            })
            .collect::<Result<Vec<f64>, _>>()?;

        let sum: f64 = probabilities.iter().sum();
        if (sum - 1.0).abs() > SUM_TOLERANCE {
            return Err(CipherError::InvalidReference(format!(
                "'{}' covers only {sum:.4} of its mass over alphabet {alphabet}",
                self.name
            )));
        }

        Ok(probabilities)
    }
}

/// Built-in reference tables, selectable by name
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReferenceKind {
    /// Letter-in-text frequencies (default)
    #[default]
    Text,
    /// Letter-in-dictionary frequencies
    Dictionary,
}

impl ReferenceKind {
    /// Select a table from its name
    ///
    /// Supported names: "text", "english", "dictionary", "dict".
    /// Defaults to text if the name is unrecognized.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "dictionary" | "dict" => Self::Dictionary,
            _ => Self::Text,
        }
    }

    #[must_use]
    pub fn distribution(self) -> &'static ReferenceDistribution {
        match self {
            Self::Text => &ENGLISH_TEXT,
            Self::Dictionary => &ENGLISH_DICTIONARY,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn built_in_tables_cover_latin() {
        let alphabet = Alphabet::latin();
        for table in [&ENGLISH_TEXT, &ENGLISH_DICTIONARY] {
            let probabilities = table.resolve(&alphabet).unwrap();
            assert_eq!(probabilities.len(), 26);
            assert!(probabilities.iter().all(|&p| p > 0.0 && p < 1.0));

            let sum: f64 = probabilities.iter().sum();
            assert!((sum - 1.0).abs() < SUM_TOLERANCE, "{} sums to {sum}", table.name());
        }
    }

    #[test]
    fn e_is_most_common_in_text() {
        let (symbol, _) = ENGLISH_TEXT
            .entries()
            .iter()
            .copied()
            .max_by(|(_, a), (_, b)| a.total_cmp(b))
            .unwrap();
        assert_eq!(symbol, 'E');
    }

    #[test]
    fn known_values() {
        assert_eq!(ENGLISH_TEXT.probability('e'), Some(0.13));
        assert_eq!(ENGLISH_DICTIONARY.probability('S'), Some(0.087));
        assert_eq!(ENGLISH_TEXT.probability('!'), None);
    }

    #[test]
    fn keyed_alphabet_resolves_by_symbol() {
        let keyed = Alphabet::new("KRYPTOSABCDEFGHIJLMNQUVWXZ").unwrap();
        let probabilities = ENGLISH_TEXT.resolve(&keyed).unwrap();
        assert_eq!(probabilities[0], ENGLISH_TEXT.probability('K').unwrap());
    }

    #[test]
    fn resolve_reports_missing_symbol() {
        let alphabet = Alphabet::new("AB1").unwrap();
        assert!(matches!(
            ENGLISH_TEXT.resolve(&alphabet),
            Err(CipherError::InvalidReference(_))
        ));
    }

    #[test]
    fn resolve_rejects_partial_alphabet() {
        let vowels = Alphabet::new("AEIOU").unwrap();
        let err = ENGLISH_TEXT.resolve(&vowels).unwrap_err();
        assert!(matches!(err, CipherError::InvalidReference(_)));
        assert!(err.is_validation());

        // A table written for the smaller alphabet is fine
        let table = ReferenceDistribution::new(
            "vowels",
            vec![('A', 0.2), ('E', 0.3), ('I', 0.2), ('O', 0.2), ('U', 0.1)],
        )
        .unwrap();
        assert_eq!(table.resolve(&vowels).unwrap().len(), 5);
    }

    #[test]
    fn custom_table_validation() {
        assert!(ReferenceDistribution::new("empty", vec![]).is_err());
        assert!(ReferenceDistribution::new("zero", vec![('A', 0.0), ('B', 1.0)]).is_err());
        assert!(ReferenceDistribution::new("dup", vec![('A', 0.5), ('a', 0.5)]).is_err());
        assert!(ReferenceDistribution::new("nan", vec![('A', f64::NAN), ('B', 0.5)]).is_err());

        let table = ReferenceDistribution::new("ok", vec![('a', 0.25), ('b', 0.75)]).unwrap();
        assert_eq!(table.name(), "ok");
        assert_eq!(table.entries(), &[('A', 0.25), ('B', 0.75)]);
    }

    #[test]
    fn kind_from_name() {
        assert_eq!(ReferenceKind::from_name("dictionary"), ReferenceKind::Dictionary);
        assert_eq!(ReferenceKind::from_name("text"), ReferenceKind::Text);
        assert_eq!(ReferenceKind::from_name("whatever"), ReferenceKind::Text);
        assert_eq!(ReferenceKind::Text.distribution(), &ENGLISH_TEXT);
    }
}
