//! Core domain types for the cipher
//!
//! Alphabet, key, filtered symbol sequences and the shared error type.
//! Everything here is pure and has no I/O.

pub mod alphabet;
mod error;
mod key;
mod sequence;

pub use alphabet::{Alphabet, LATIN};
pub use error::CipherError;
pub use key::{Key, KeyStream};
pub use sequence::{Ciphertext, Plaintext, SymbolSequence};
