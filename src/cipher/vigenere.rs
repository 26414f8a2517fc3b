//! Vigenère encryption and decryption
//!
//! `c[i] = (p[i] + k[i]) mod N` and `p[i] = (c[i] - k[i]) mod N`, with the key
//! stream repeating the key. Inputs are already filtered, so there is no
//! pass-through branch for unknown symbols.

use crate::core::{Alphabet, CipherError, Ciphertext, Key, Plaintext, SymbolSequence};

/// Direction of the modular shift
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Forward,
    Backward,
}

/// Encrypt a plaintext with a key
///
/// # Errors
/// Returns `CipherError::OutOfAlphabet` if the plaintext or key was built
/// against a different alphabet.
///
/// # Examples
/// ```
/// use vigenere_cracker::cipher::encrypt_sequence;
/// use vigenere_cracker::core::{Alphabet, Key, Plaintext};
///
/// let alphabet = Alphabet::latin();
/// let plain = Plaintext::from_text("attack at dawn", &alphabet);
/// let key = Key::new("LEMON", &alphabet).unwrap();
///
/// let cipher = encrypt_sequence(&plain, &key, &alphabet).unwrap();
/// assert_eq!(cipher.to_string(), "LXFOPVEFRNHR");
/// ```
pub fn encrypt_sequence(
    plaintext: &Plaintext,
    key: &Key,
    alphabet: &Alphabet,
) -> Result<Ciphertext, CipherError> {
    shift(plaintext.sequence(), key, alphabet, Direction::Forward).map(Ciphertext::new)
}

/// Decrypt a ciphertext with a key
///
/// # Errors
/// Returns `CipherError::OutOfAlphabet` if the ciphertext or key was built
/// against a different alphabet.
pub fn decrypt_sequence(
    ciphertext: &Ciphertext,
    key: &Key,
    alphabet: &Alphabet,
) -> Result<Plaintext, CipherError> {
    shift(ciphertext.sequence(), key, alphabet, Direction::Backward).map(Plaintext::new)
}

fn shift(
    sequence: &SymbolSequence,
    key: &Key,
    alphabet: &Alphabet,
    direction: Direction,
) -> Result<SymbolSequence, CipherError> {
    let stream = key.stream(alphabet)?;

    sequence
        .symbols()
        .iter()
        .zip(stream)
        .map(|(&symbol, key_ordinal)| {
            let ordinal = alphabet.index_of(symbol)? as i64;
            let key_ordinal = key_ordinal as i64;
            let shifted = match direction {
                Direction::Forward => ordinal + key_ordinal,
                Direction::Backward => ordinal - key_ordinal,
            };
            alphabet.symbol_at(alphabet.modulo(shifted))
        })
        .collect()
}

/// Constant-shift (Caesar) decryption over raw ordinals
///
/// Equivalent to Vigenère decryption with the one-symbol key at `shift`.
/// The cracker runs this once per candidate shift per column.
#[must_use]
pub fn unshift_ordinals(ordinals: &[usize], shift: usize, alphabet_len: usize) -> Vec<usize> {
    ordinals
        .iter()
        .map(|&ordinal| (ordinal + alphabet_len - shift % alphabet_len) % alphabet_len)
        .collect()
}
