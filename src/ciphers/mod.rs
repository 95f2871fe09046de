//! Classical cipher transforms
//!
//! Each submodule exposes an `encrypt`/`decrypt` pair over the lowercase
//! alphabet:
//! - `shift`: Caesar shift by a numeric key
//! - `substitution`: random monoalphabetic substitution (generated key)
//! - `polyalphabetic`: repeating-key (Vigenère) substitution
//! - `transposition`: round-robin columnar transposition
//! - `mirror`: Atbash, keyless and self-inverse

pub mod mirror;
pub mod polyalphabetic;
pub mod shift;
pub mod substitution;
pub mod transposition;

use std::fmt;
use std::str::FromStr;

use crate::error::CipherError;

pub use substitution::PermutationKey;

/// Direction of a cipher operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Encrypt,
    Decrypt,
}

impl Direction {
    /// Resolve a pair of mutually exclusive encrypt/decrypt flags
    pub fn from_flags(encrypt: bool, decrypt: bool) -> Result<Self, CipherError> {
        match (encrypt, decrypt) {
            (true, false) => Ok(Self::Encrypt),
            (false, true) => Ok(Self::Decrypt),
            _ => Err(CipherError::ModeConflict),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Encrypt => write!(f, "encrypt"),
            Self::Decrypt => write!(f, "decrypt"),
        }
    }
}

/// What kind of key an operation expects
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyKind {
    /// No key at all
    None,
    /// An integer (shift amount or column count)
    Numeric,
    /// A string of letters
    Text,
}

/// The five supported ciphers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CipherKind {
    Caesar,
    Substitution,
    Polyalphabetic,
    Transposition,
    Atbash,
}

impl CipherKind {
    /// All ciphers, in menu order
    pub const ALL: [CipherKind; 5] = [
        Self::Caesar,
        Self::Substitution,
        Self::Polyalphabetic,
        Self::Transposition,
        Self::Atbash,
    ];

    /// Canonical lowercase name
    pub fn name(&self) -> &'static str {
        match self {
            Self::Caesar => "caesar",
            Self::Substitution => "substitution",
            Self::Polyalphabetic => "polyalphabetic",
            Self::Transposition => "transposition",
            Self::Atbash => "atbash",
        }
    }

    /// The key an operation in `direction` needs
    ///
    /// Substitution encryption generates its own key, so only decryption
    /// asks for one.
    pub fn key_kind(&self, direction: Direction) -> KeyKind {
        match (self, direction) {
            (Self::Caesar | Self::Transposition, _) => KeyKind::Numeric,
            (Self::Polyalphabetic, _) => KeyKind::Text,
            (Self::Substitution, Direction::Decrypt) => KeyKind::Text,
            (Self::Substitution, Direction::Encrypt) | (Self::Atbash, _) => KeyKind::None,
        }
    }
}

impl fmt::Display for CipherKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for CipherKind {
    type Err = CipherError;

    /// Accepts canonical names, common aliases, and the menu numbers `c1`..`c5`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "caesar" | "shift" | "c1" | "1" => Ok(Self::Caesar),
            "substitution" | "simple" | "c2" | "2" => Ok(Self::Substitution),
            "polyalphabetic" | "vigenere" | "poly" | "c3" | "3" => Ok(Self::Polyalphabetic),
            "transposition" | "columnar" | "c4" | "4" => Ok(Self::Transposition),
            "atbash" | "mirror" | "c5" | "5" => Ok(Self::Atbash),
            other => Err(CipherError::InvalidInput(format!(
                "unknown cipher '{}' (expected one of: caesar, substitution, polyalphabetic, transposition, atbash)",
                other
            ))),
        }
    }
}
