//! Shift (Caesar) cipher
//!
//! Every letter moves a fixed number of places along the alphabet. The
//! message must consist of letters only: whitespace and punctuation are
//! rejected rather than passed through.

use crate::alphabet::{index_of, letter_at, normalize, shift_index};
use crate::error::{CipherError, CipherResult};

/// Largest accepted shift
pub const MAX_SHIFT: i64 = 25;

/// Check that a shift lies in `[0, MAX_SHIFT]`
pub fn validate_shift(shift: i64) -> CipherResult<i64> {
    if (0..=MAX_SHIFT).contains(&shift) {
        Ok(shift)
    } else {
        Err(CipherError::key_out_of_range(shift))
    }
}

/// Encrypt by moving each letter `shift` places forward
///
/// # Examples
/// ```
/// use classic_ciphers::ciphers::shift;
/// assert_eq!(shift::encrypt("hello", 3).unwrap(), "khoor");
/// ```
pub fn encrypt(message: &str, shift: i64) -> CipherResult<String> {
    let shift = validate_shift(shift)?;
    rotate(message, shift)
}

/// Decrypt by moving each letter `shift` places back
pub fn decrypt(message: &str, shift: i64) -> CipherResult<String> {
    let shift = validate_shift(shift)?;
    rotate(message, -shift)
}

fn rotate(message: &str, offset: i64) -> CipherResult<String> {
    normalize(message)
        .chars()
        .map(|c| {
            index_of(c)
                .map(|i| letter_at(shift_index(i, offset)))
                .ok_or_else(|| CipherError::not_in_alphabet(c))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encrypt_hello() {
        assert_eq!(encrypt("hello", 3).unwrap(), "khoor");
        assert_eq!(decrypt("khoor", 3).unwrap(), "hello");
    }

    #[test]
    fn test_wraps_around_alphabet() {
        assert_eq!(encrypt("xyz", 3).unwrap(), "abc");
        assert_eq!(decrypt("abc", 3).unwrap(), "xyz");
    }

    #[test]
    fn test_uppercase_is_folded() {
        assert_eq!(encrypt("HeLLo", 1).unwrap(), "ifmmp");
    }

    #[test]
    fn test_zero_shift_is_identity() {
        assert_eq!(encrypt("attack", 0).unwrap(), "attack");
    }

    #[test]
    fn test_round_trip_every_shift() {
        let message = "thequickbrownfoxjumpsoverthelazydog";
        for shift in 0..=MAX_SHIFT {
            let ciphertext = encrypt(message, shift).unwrap();
            assert_eq!(decrypt(&ciphertext, shift).unwrap(), message, "shift {}", shift);
        }
    }

    #[test]
    fn test_out_of_range_shift_rejected() {
        assert!(encrypt("hello", 26).unwrap_err().is_invalid_key());
        assert!(encrypt("hello", -1).unwrap_err().is_invalid_key());
        assert!(decrypt("hello", 26).unwrap_err().is_invalid_key());
    }

    #[test]
    fn test_space_is_invalid_input() {
        let err = encrypt("hello world", 3).unwrap_err();
        assert!(err.is_invalid_input());
    }

    #[test]
    fn test_punctuation_is_invalid_input() {
        assert!(decrypt("khoor!", 3).unwrap_err().is_invalid_input());
    }

    #[test]
    fn test_empty_message() {
        assert_eq!(encrypt("", 7).unwrap(), "");
    }
}
