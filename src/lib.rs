//! Vigenère Cracker
//!
//! A Vigenère cipher over a configurable alphabet, plus ciphertext-only key
//! recovery by chi-squared frequency analysis.
//!
//! # Quick Start
//!
//! ```rust
//! use vigenere_cracker::analysis::ENGLISH_TEXT;
//! use vigenere_cracker::core::Alphabet;
//! use vigenere_cracker::{crack_for_length, decrypt, encrypt};
//!
//! let alphabet = Alphabet::latin();
//! let plain = "It is a truth universally acknowledged, that a single man in \
//!              possession of a good fortune, must be in want of a wife.";
//!
//! let cipher = encrypt(plain, "H", &alphabet).unwrap();
//! assert_eq!(decrypt(&cipher, "H", &alphabet).unwrap(), "ITISATRUTHUNIVERSALLYACKNOWLEDGEDTHATASINGLEMANINPOSSESSIONOFAGOODFORTUNEMUSTBEINWANTOFAWIFE");
//!
//! let result = crack_for_length(&cipher, 1, &ENGLISH_TEXT).unwrap();
//! assert_eq!(result.key.to_string(), "H");
//! ```

// Core domain types
pub mod core;

// Cipher transform
pub mod cipher;

// Frequency tables and reference distributions
pub mod analysis;

// Key recovery
pub mod crack;

// Input text
pub mod sources;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

pub use analysis::build_frequency_map;
pub use cipher::{decrypt_text as decrypt, encrypt_text as encrypt};
pub use crack::crack_for_length;
