//! Cipher engine
//!
//! Dispatches a `(direction, cipher, key, message)` request to the matching
//! cipher module and returns the transformed text. The engine owns the random
//! source used for substitution keys so callers (and tests) can inject a
//! deterministic one.

use log::{debug, warn};
use rand::rngs::ThreadRng;
use rand::Rng;
use zeroize::Zeroizing;

use crate::ciphers::{
    mirror, polyalphabetic, shift, substitution, transposition, CipherKind, Direction, KeyKind,
    PermutationKey,
};
use crate::error::{CipherError, CipherResult};

/// Key material supplied with a request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CipherKey {
    None,
    Numeric(i64),
    Text(Zeroizing<String>),
}

impl CipherKey {
    /// Wrap a string key
    pub fn text(key: impl Into<String>) -> Self {
        Self::Text(Zeroizing::new(key.into()))
    }

    /// The kind of key this is
    pub fn kind(&self) -> KeyKind {
        match self {
            Self::None => KeyKind::None,
            Self::Numeric(_) => KeyKind::Numeric,
            Self::Text(_) => KeyKind::Text,
        }
    }
}

/// A single cipher operation
#[derive(Debug, Clone)]
pub struct CipherRequest {
    pub cipher: CipherKind,
    pub direction: Direction,
    pub key: CipherKey,
    pub message: String,
}

impl CipherRequest {
    pub fn new(
        cipher: CipherKind,
        direction: Direction,
        key: CipherKey,
        message: impl Into<String>,
    ) -> Self {
        Self {
            cipher,
            direction,
            key,
            message: message.into(),
        }
    }
}

/// Result of a cipher operation
#[derive(Debug, Clone)]
pub struct CipherOutput {
    /// Ciphertext or plaintext
    pub text: String,
    /// Key generated during substitution encryption, needed to decrypt later
    pub generated_key: Option<PermutationKey>,
}

impl CipherOutput {
    fn from_text(text: String) -> Self {
        Self {
            text,
            generated_key: None,
        }
    }
}

/// Runs cipher requests
pub struct CipherEngine<R = ThreadRng> {
    rng: R,
}

impl CipherEngine<ThreadRng> {
    /// Create an engine backed by the thread-local random generator
    pub fn new() -> Self {
        Self {
            rng: rand::thread_rng(),
        }
    }
}

impl Default for CipherEngine<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> CipherEngine<R> {
    /// Create an engine with a specific random source
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Run a request
    pub fn process(&mut self, request: &CipherRequest) -> CipherResult<CipherOutput> {
        let CipherRequest {
            cipher,
            direction,
            key,
            message,
        } = request;

        debug!(
            "{} with {} cipher ({} characters)",
            direction,
            cipher,
            message.chars().count()
        );

        let expected = cipher.key_kind(*direction);
        if expected == KeyKind::None && key.kind() != KeyKind::None {
            warn!("{} cipher takes no key to {}; ignoring it", cipher, direction);
        }

        match (cipher, direction) {
            (CipherKind::Caesar, Direction::Encrypt) => {
                shift::encrypt(message, numeric_key(*cipher, key)?).map(CipherOutput::from_text)
            }
            (CipherKind::Caesar, Direction::Decrypt) => {
                shift::decrypt(message, numeric_key(*cipher, key)?).map(CipherOutput::from_text)
            }
            (CipherKind::Substitution, Direction::Encrypt) => {
                let encrypted = substitution::encrypt(message, &mut self.rng);
                Ok(CipherOutput {
                    text: encrypted.ciphertext,
                    generated_key: Some(encrypted.key),
                })
            }
            (CipherKind::Substitution, Direction::Decrypt) => {
                substitution::decrypt(message, text_key(*cipher, key)?).map(CipherOutput::from_text)
            }
            (CipherKind::Polyalphabetic, Direction::Encrypt) => {
                polyalphabetic::encrypt(message, text_key(*cipher, key)?).map(CipherOutput::from_text)
            }
            (CipherKind::Polyalphabetic, Direction::Decrypt) => {
                polyalphabetic::decrypt(message, text_key(*cipher, key)?).map(CipherOutput::from_text)
            }
            (CipherKind::Transposition, Direction::Encrypt) => {
                transposition::encrypt(message, column_count(*cipher, key)?)
                    .map(CipherOutput::from_text)
            }
            (CipherKind::Transposition, Direction::Decrypt) => {
                transposition::decrypt(message, column_count(*cipher, key)?)
                    .map(CipherOutput::from_text)
            }
            (CipherKind::Atbash, Direction::Encrypt) => Ok(CipherOutput::from_text(mirror::encrypt(message))),
            (CipherKind::Atbash, Direction::Decrypt) => Ok(CipherOutput::from_text(mirror::decrypt(message))),
        }
    }
}

fn numeric_key(cipher: CipherKind, key: &CipherKey) -> CipherResult<i64> {
    match key {
        CipherKey::Numeric(n) => Ok(*n),
        _ => Err(CipherError::InvalidKey(format!(
            "the {} cipher needs a numeric key",
            cipher
        ))),
    }
}

fn column_count(cipher: CipherKind, key: &CipherKey) -> CipherResult<usize> {
    let n = numeric_key(cipher, key)?;
    usize::try_from(n)
        .map_err(|_| CipherError::InvalidKey("column count must be at least 1".into()))
}

fn text_key(cipher: CipherKind, key: &CipherKey) -> CipherResult<&str> {
    match key {
        CipherKey::Text(text) => Ok(text.as_str()),
        _ => Err(CipherError::InvalidKey(format!(
            "the {} cipher needs an alphabetic key",
            cipher
        ))),
    }
}
