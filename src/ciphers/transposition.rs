//! Columnar transposition cipher
//!
//! Encryption deals the characters of the message round-robin into
//! `columns` buckets (character `p` lands in bucket `p % columns`) and reads
//! the buckets back in order. Decryption puts every character back at the
//! position it was dealt from, so the two are exact inverses for any
//! message length.
//!
//! Whitespace is removed first; every other character is moved as-is.

use log::debug;

use crate::alphabet::normalize_stripped;
use crate::error::{CipherError, CipherResult};

/// Encrypt by reading the message out bucket by bucket
///
/// # Examples
/// ```
/// use classic_ciphers::ciphers::transposition;
/// assert_eq!(transposition::encrypt("abcdefg", 3).unwrap(), "adgbecf");
/// ```
pub fn encrypt(message: &str, columns: usize) -> CipherResult<String> {
    let chars = prepare(message, columns)?;
    Ok(read_order(chars.len(), columns).map(|p| chars[p]).collect())
}

/// Decrypt by returning each character to its original position
pub fn decrypt(message: &str, columns: usize) -> CipherResult<String> {
    let chars = prepare(message, columns)?;
    let mut plain = vec!['\0'; chars.len()];
    for (&c, p) in chars.iter().zip(read_order(chars.len(), columns)) {
        plain[p] = c;
    }
    Ok(plain.into_iter().collect())
}

/// Check a column count against the stripped message length
///
/// The count must be at least 1 and no larger than the message, except that
/// an empty message accepts any positive count.
pub fn validate_columns(columns: usize, len: usize) -> CipherResult<()> {
    if columns == 0 {
        return Err(CipherError::InvalidKey(
            "column count must be at least 1".into(),
        ));
    }
    if len > 0 && columns > len {
        return Err(CipherError::InvalidKey(format!(
            "column count {} exceeds message length {}",
            columns, len
        )));
    }
    Ok(())
}

fn prepare(message: &str, columns: usize) -> CipherResult<Vec<char>> {
    let chars: Vec<char> = normalize_stripped(message).chars().collect();
    validate_columns(columns, chars.len())?;
    debug!(
        "transposing {} characters over {} columns ({} full rows)",
        chars.len(),
        columns,
        chars.len() / columns
    );
    Ok(chars)
}

/// Plaintext positions in ciphertext order
fn read_order(len: usize, columns: usize) -> impl Iterator<Item = usize> {
    (0..columns).flat_map(move |bucket| (bucket..len).step_by(columns))
}
