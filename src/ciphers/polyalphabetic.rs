//! Polyalphabetic (repeating-key) cipher
//!
//! Each letter is shifted by the corresponding letter of a key that repeats
//! across the message, the classic Vigenère scheme. Everything that is not a
//! letter is removed before the key is applied, so the key stream only
//! advances on letters.

use crate::alphabet::{index_of, letter_at, normalize, shift_index};
use crate::error::{CipherError, CipherResult};

/// Encrypt with a non-empty alphabetic key
///
/// # Examples
/// ```
/// use classic_ciphers::ciphers::polyalphabetic;
/// assert_eq!(polyalphabetic::encrypt("attack at dawn", "lemon").unwrap(), "lxfopvefrnhr");
/// ```
pub fn encrypt(message: &str, key: &str) -> CipherResult<String> {
    combine(message, key, 1)
}

/// Decrypt with the key used for encryption
pub fn decrypt(message: &str, key: &str) -> CipherResult<String> {
    combine(message, key, -1)
}

/// Validate a key and convert it to alphabet offsets
pub fn key_offsets(key: &str) -> CipherResult<Vec<i64>> {
    if key.is_empty() {
        return Err(CipherError::InvalidKey("key must not be empty".into()));
    }

    key.chars()
        .flat_map(char::to_lowercase)
        .map(|c| {
            index_of(c).map(|i| i as i64).ok_or_else(|| {
                CipherError::InvalidKey(format!(
                    "key must be alphabetic, found '{}'",
                    c.escape_default()
                ))
            })
        })
        .collect()
}

fn combine(message: &str, key: &str, direction: i64) -> CipherResult<String> {
    let offsets = key_offsets(key)?;

    Ok(normalize(message)
        .chars()
        .filter_map(index_of)
        .zip(offsets.iter().cycle())
        .map(|(m, &k)| letter_at(shift_index(m, direction * k)))
        .collect())
}
