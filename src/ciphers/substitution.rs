//! Random monoalphabetic substitution cipher
//!
//! Encryption draws a fresh permutation of the alphabet and uses it as the
//! substitution table. The permutation is the only way back to the
//! plaintext, so it is returned alongside the ciphertext and must be kept by
//! the caller.
//!
//! Whitespace is dropped in both directions; other characters outside the
//! alphabet pass through unchanged.

use std::fmt;
use std::str::FromStr;

use rand::seq::SliceRandom;
use rand::Rng;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::alphabet::{index_of, normalize, ALPHABET, ALPHABET_LEN};
use crate::error::{CipherError, CipherResult};

/// A bijective remapping of the alphabet
///
/// `letters[i]` is the ciphertext letter for the plaintext letter at
/// alphabet index `i`.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct PermutationKey {
    letters: [u8; ALPHABET_LEN],
}

impl PermutationKey {
    /// Draw a uniformly random permutation from `rng`
    pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut letters = *ALPHABET;
        letters.shuffle(rng);
        Self { letters }
    }

    /// Parse a 26-letter key, case-insensitively
    ///
    /// The key must contain every letter of the alphabet exactly once.
    pub fn parse(key: &str) -> CipherResult<Self> {
        let mut letters = [0u8; ALPHABET_LEN];
        let mut seen = [false; ALPHABET_LEN];
        let mut count = 0;

        for c in key.chars().flat_map(char::to_lowercase) {
            let index = index_of(c).ok_or_else(|| {
                CipherError::InvalidKey(format!(
                    "substitution key must be alphabetic, found '{}'",
                    c.escape_default()
                ))
            })?;

            if count < ALPHABET_LEN {
                letters[count] = c as u8;
            }
            count += 1;

            if seen[index] {
                return Err(CipherError::InvalidKey(format!(
                    "substitution key repeats the letter '{}'",
                    c
                )));
            }
            seen[index] = true;
        }

        if count != ALPHABET_LEN {
            return Err(CipherError::InvalidKey(format!(
                "substitution key must be {} letters long, got {}",
                ALPHABET_LEN, count
            )));
        }

        Ok(Self { letters })
    }

    /// The ciphertext letter for a plaintext alphabet index
    fn substitute(&self, index: usize) -> char {
        self.letters[index] as char
    }

    /// Table mapping a ciphertext letter's alphabet index to its plaintext letter
    fn inverse(&self) -> [u8; ALPHABET_LEN] {
        let mut inverse = [0u8; ALPHABET_LEN];
        for (plain, &cipher) in ALPHABET.iter().zip(self.letters.iter()) {
            inverse[(cipher - b'a') as usize] = *plain;
        }
        inverse
    }
}

impl FromStr for PermutationKey {
    type Err = CipherError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for PermutationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &b in &self.letters {
            write!(f, "{}", b as char)?;
        }
        Ok(())
    }
}

impl fmt::Debug for PermutationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("PermutationKey").field(&self.to_string()).finish()
    }
}

/// Ciphertext together with the key that produced it
#[derive(Debug, Clone)]
pub struct Encrypted {
    pub ciphertext: String,
    pub key: PermutationKey,
}

/// Encrypt under a freshly generated permutation
pub fn encrypt<R: Rng + ?Sized>(message: &str, rng: &mut R) -> Encrypted {
    let key = PermutationKey::generate(rng);
    let ciphertext = encrypt_with_key(message, &key);
    Encrypted { ciphertext, key }
}

/// Encrypt under a caller-supplied permutation
pub fn encrypt_with_key(message: &str, key: &PermutationKey) -> String {
    normalize(message)
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| index_of(c).map_or(c, |i| key.substitute(i)))
        .collect()
}

/// Decrypt with a 26-letter key string
pub fn decrypt(message: &str, key: &str) -> CipherResult<String> {
    let key = PermutationKey::parse(key)?;
    Ok(decrypt_with_key(message, &key))
}

/// Decrypt with an already-parsed permutation
pub fn decrypt_with_key(message: &str, key: &PermutationKey) -> String {
    let inverse = key.inverse();
    normalize(message)
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| index_of(c).map_or(c, |i| inverse[i] as char))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alphabet::normalize_stripped;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const REVERSED: &str = "zyxwvutsrqponmlkjihgfedcba";
    const QWERTY: &str = "qwertyuiopasdfghjklzxcvbnm";

    #[test]
    fn test_parse_valid_key() {
        let key = PermutationKey::parse(QWERTY).unwrap();
        assert_eq!(key.to_string(), QWERTY);
    }

    #[test]
    fn test_parse_folds_case() {
        let key: PermutationKey = "QWERTYUIOPASDFGHJKLZXCVBNM".parse().unwrap();
        assert_eq!(key.to_string(), QWERTY);
    }

    #[test]
    fn test_parse_rejects_short_key() {
        let err = PermutationKey::parse(&QWERTY[..25]).unwrap_err();
        assert!(err.is_invalid_key());
        assert_eq!(
            err.to_string(),
            "Invalid key: substitution key must be 26 letters long, got 25"
        );
    }

    #[test]
    fn test_parse_rejects_long_key() {
        let long = format!("{}a", QWERTY);
        assert!(PermutationKey::parse(&long).unwrap_err().is_invalid_key());
    }

    #[test]
    fn test_parse_rejects_repeated_letter() {
        let repeated = format!("b{}", &REVERSED[..25]);
        let err = PermutationKey::parse(&repeated).unwrap_err();
        assert!(err.is_invalid_key());
    }

    #[test]
    fn test_parse_rejects_non_letters() {
        let with_digit = format!("1{}", &QWERTY[1..]);
        assert!(PermutationKey::parse(&with_digit).unwrap_err().is_invalid_key());
        assert!(PermutationKey::parse("").unwrap_err().is_invalid_key());
    }

    #[test]
    fn test_encrypt_with_known_key() {
        let key = PermutationKey::parse(QWERTY).unwrap();
        assert_eq!(encrypt_with_key("Hello World!", &key), "itssgvgksr!");
        assert_eq!(decrypt_with_key("itssgvgksr!", &key), "helloworld!");
    }

    #[test]
    fn test_decrypt_with_key_string() {
        assert_eq!(decrypt("zyx", REVERSED).unwrap(), "abc");
        assert!(decrypt("zyx", &REVERSED[..25]).unwrap_err().is_invalid_key());
    }

    #[test]
    fn test_generated_key_is_permutation() {
        let mut rng = StdRng::seed_from_u64(7);
        let key = PermutationKey::generate(&mut rng);
        let reparsed = PermutationKey::parse(&key.to_string()).unwrap();
        assert_eq!(key, reparsed);
    }

    #[test]
    fn test_seeded_generation_is_reproducible() {
        let first = encrypt("attack at dawn", &mut StdRng::seed_from_u64(42));
        let second = encrypt("attack at dawn", &mut StdRng::seed_from_u64(42));
        assert_eq!(first.key, second.key);
        assert_eq!(first.ciphertext, second.ciphertext);
    }

    #[test]
    fn test_round_trip_with_generated_key() {
        let mut rng = StdRng::seed_from_u64(2024);
        for message in ["Attack at Dawn", "meet me, 10pm.", "   ", "zzz"] {
            let encrypted = encrypt(message, &mut rng);
            let key = encrypted.key.to_string();
            assert_eq!(
                decrypt(&encrypted.ciphertext, &key).unwrap(),
                normalize_stripped(message)
            );
        }
    }

    #[test]
    fn test_debug_shows_letters() {
        let key = PermutationKey::parse(REVERSED).unwrap();
        assert_eq!(format!("{:?}", key), format!("PermutationKey(\"{}\")", REVERSED));
    }
}
