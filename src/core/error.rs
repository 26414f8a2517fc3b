//! Error type shared by the cipher and cryptanalysis layers

use std::fmt;

/// Everything that can go wrong inside the cipher and cracking core
///
/// None of these are retried or papered over: they propagate to the caller,
/// who decides whether to skip a key length, report, or try something else.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CipherError {
    /// Alphabet shorter than two symbols or containing a duplicate
    InvalidAlphabet(String),
    /// Symbol is not a member of the alphabet
    OutOfAlphabet(char),
    /// Key has no symbols
    EmptyKey,
    /// Ciphertext has no symbols after filtering
    EmptyInput,
    /// Key length hypothesis leaves at least one column empty
    InsufficientData { key_length: usize, available: usize },
    /// Ordinal outside `0..len`
    IndexOutOfRange { index: usize, len: usize },
    /// Key length hypothesis of zero
    InvalidKeyLength(usize),
    /// Reference distribution does not cover the alphabet
    InvalidReference(String),
}

impl CipherError {
    /// Whether this error rejects the caller's arguments before any work is done
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::InvalidAlphabet(_)
                | Self::InvalidKeyLength(_)
                | Self::InvalidReference(_)
                | Self::EmptyKey
        )
    }
}

impl fmt::Display for CipherError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidAlphabet(reason) => write!(f, "Invalid alphabet: {reason}"),
            Self::OutOfAlphabet(symbol) => {
                write!(f, "Symbol '{symbol}' is not in the alphabet")
            }
            Self::EmptyKey => write!(f, "Key must contain at least one symbol"),
            Self::EmptyInput => write!(f, "Input contains no alphabet symbols"),
            Self::InsufficientData {
                key_length,
                available,
            } => write!(
                f,
                "Key length {key_length} needs at least {key_length} symbols, got {available}"
            ),
            Self::IndexOutOfRange { index, len } => {
                write!(f, "Ordinal {index} out of range for alphabet of size {len}")
            }
            Self::InvalidKeyLength(len) => {
                write!(f, "Key length must be at least 1, got {len}")
            }
            Self::InvalidReference(reason) => write!(f, "Invalid reference distribution: {reason}"),
        }
    }
}

impl std::error::Error for CipherError {}
