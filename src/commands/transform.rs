//! Encrypt / decrypt command

use crate::cipher::{decrypt_sequence, encrypt_sequence};
use crate::core::{Alphabet, CipherError, Ciphertext, Key, Plaintext};

/// Which way to run the cipher
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Encrypt,
    Decrypt,
}

/// Result of encrypting or decrypting a text
pub struct TransformResult {
    pub mode: Mode,
    pub key: String,
    /// Characters in the raw input
    pub input_chars: usize,
    /// Alphabet symbols kept after filtering
    pub symbols: usize,
    pub output: String,
}

/// Filter `text`, then encrypt or decrypt it with `key`
///
/// # Errors
/// Returns `CipherError::EmptyKey` or `CipherError::OutOfAlphabet` if the key
/// is unusable with `alphabet`.
pub fn run_transform(
    mode: Mode,
    text: &str,
    key: &str,
    alphabet: &Alphabet,
) -> Result<TransformResult, CipherError> {
    let key = Key::new(key, alphabet)?;

    let (symbols, output) = match mode {
        Mode::Encrypt => {
            let plain = Plaintext::from_text(text, alphabet);
            (plain.len(), encrypt_sequence(&plain, &key, alphabet)?.to_string())
        }
        Mode::Decrypt => {
            let cipher = Ciphertext::from_text(text, alphabet);
            (cipher.len(), decrypt_sequence(&cipher, &key, alphabet)?.to_string())
        }
    };

    Ok(TransformResult {
        mode,
        key: key.to_string(),
        input_chars: text.chars().count(),
        symbols,
        output,
    })
}
