//! Mirror (Atbash) cipher
//!
//! Substitutes each letter with its mirror image in the alphabet
//! (`a <-> z`, `b <-> y`, ...). The transform is its own inverse and takes
//! no key.

use crate::alphabet::{index_of, letter_at, normalize, ALPHABET_LEN};

/// Encrypt a message
///
/// Whitespace is dropped; characters outside the alphabet pass through.
pub fn encrypt(message: &str) -> String {
    mirror(message)
}

/// Decrypt a message (identical to [`encrypt`])
pub fn decrypt(message: &str) -> String {
    mirror(message)
}

fn mirror(message: &str) -> String {
    normalize(message)
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| match index_of(c) {
            Some(i) => letter_at(ALPHABET_LEN - 1 - i),
            None => c,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alphabet::normalize_stripped;

    #[test]
    fn test_abc_xyz() {
        assert_eq!(encrypt("abc xyz"), "zyxcba");
    }

    #[test]
    fn test_encrypt_equals_decrypt() {
        for message in ["Hello World", "wizard", "a.b,c!", ""] {
            assert_eq!(encrypt(message), decrypt(message));
        }
    }

    #[test]
    fn test_self_inverse() {
        for message in ["The Quick Brown Fox", "it's 4 o'clock", "  spaced\tout\n"] {
            assert_eq!(encrypt(&encrypt(message)), normalize_stripped(message));
        }
    }

    #[test]
    fn test_non_letters_pass_through() {
        assert_eq!(encrypt("a1-b2"), "z1-y2");
    }
}
