//! Vigenère cipher transform
//!
//! Sequence-level operations live in [`vigenere`]; the functions here take raw
//! strings, filter them, and return the transformed symbols as a `String`.

mod vigenere;

pub use vigenere::{decrypt_sequence, encrypt_sequence, unshift_ordinals};

use crate::core::{Alphabet, CipherError, Ciphertext, Key, Plaintext};

/// Encrypt raw text: filter to the alphabet, then shift by the key
///
/// # Errors
/// - `CipherError::EmptyKey` if `key` is empty
/// - `CipherError::OutOfAlphabet` if `key` has a symbol outside the alphabet
///
/// # Examples
/// ```
/// use vigenere_cracker::cipher::encrypt_text;
/// use vigenere_cracker::core::Alphabet;
///
/// let cipher = encrypt_text("Hello, World!", "ab", &Alphabet::latin()).unwrap();
/// assert_eq!(cipher, "HFLMOXOSLE");
/// ```
pub fn encrypt_text(plaintext: &str, key: &str, alphabet: &Alphabet) -> Result<String, CipherError> {
    let key = Key::new(key, alphabet)?;
    let plaintext = Plaintext::from_text(plaintext, alphabet);
    encrypt_sequence(&plaintext, &key, alphabet).map(|cipher| cipher.to_string())
}

/// Decrypt raw text: filter to the alphabet, then unshift by the key
///
/// # Errors
/// - `CipherError::EmptyKey` if `key` is empty
/// - `CipherError::OutOfAlphabet` if `key` has a symbol outside the alphabet
pub fn decrypt_text(ciphertext: &str, key: &str, alphabet: &Alphabet) -> Result<String, CipherError> {
    let key = Key::new(key, alphabet)?;
    let ciphertext = Ciphertext::from_text(ciphertext, alphabet);
    decrypt_sequence(&ciphertext, &key, alphabet).map(|plain| plain.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_round_trip_loses_only_filtered_characters() {
        let alphabet = Alphabet::latin();
        let cipher = encrypt_text("Meet me at 10 o'clock!", "lock", &alphabet).unwrap();
        let plain = decrypt_text(&cipher, "LOCK", &alphabet).unwrap();
        assert_eq!(plain, "MEETMEATOCLOCK");
    }

    #[test]
    fn empty_key_text() {
        let alphabet = Alphabet::latin();
        assert_eq!(
            encrypt_text("abc", "", &alphabet),
            Err(CipherError::EmptyKey)
        );
        assert_eq!(
            decrypt_text("abc", "", &alphabet),
            Err(CipherError::EmptyKey)
        );
    }

    #[test]
    fn decrypt_filters_ciphertext() {
        let alphabet = Alphabet::latin();
        assert_eq!(
            decrypt_text("hfl mox-osle", "AB", &alphabet).unwrap(),
            "HELLOWORLD"
        );
    }
}
