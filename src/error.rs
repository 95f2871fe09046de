//! Custom error types for classic-ciphers
//!
//! This module defines the error hierarchy for the cipher engine and the
//! command-line layer around it, using thiserror for ergonomic definitions.

use thiserror::Error;

/// The main error type for cipher operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CipherError {
    /// The message contains a character the selected cipher cannot handle
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The key is missing, malformed, or out of range for the selected cipher
    #[error("Invalid key: {0}")]
    InvalidKey(String),

    /// Both or neither of encrypt/decrypt were requested
    #[error("Please select exactly one of encrypt or decrypt")]
    ModeConflict,

    /// No cipher was selected
    #[error("No cipher selected (use --cipher)")]
    NoCipher,

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),
}

impl CipherError {
    /// Create an error for a character outside the alphabet
    pub fn not_in_alphabet(c: char) -> Self {
        Self::InvalidInput(format!("'{}' is not a letter of the alphabet", c.escape_default()))
    }

    /// Create an error for a numeric key outside [0, 25]
    pub fn key_out_of_range(key: i64) -> Self {
        Self::InvalidKey(format!("{} is outside the range 0-25", key))
    }

    /// Check if this is an invalid key error
    pub fn is_invalid_key(&self) -> bool {
        matches!(self, Self::InvalidKey(_))
    }

    /// Check if this is an invalid input error
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput(_))
    }
}

impl From<std::io::Error> for CipherError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for CipherError {
    fn from(err: serde_json::Error) -> Self {
        Self::Config(err.to_string())
    }
}

/// Result type alias for cipher operations
pub type CipherResult<T> = Result<T, CipherError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CipherError::InvalidKey("empty key".into());
        assert_eq!(err.to_string(), "Invalid key: empty key");
    }

    #[test]
    fn test_not_in_alphabet() {
        let err = CipherError::not_in_alphabet(' ');
        assert_eq!(err.to_string(), "Invalid input: ' ' is not a letter of the alphabet");
        assert!(err.is_invalid_input());
        assert!(!err.is_invalid_key());
    }

    #[test]
    fn test_not_in_alphabet_escapes_control_chars() {
        let err = CipherError::not_in_alphabet('\n');
        assert_eq!(err.to_string(), "Invalid input: '\\n' is not a letter of the alphabet");
    }

    #[test]
    fn test_key_out_of_range() {
        let err = CipherError::key_out_of_range(26);
        assert_eq!(err.to_string(), "Invalid key: 26 is outside the range 0-25");
        assert!(err.is_invalid_key());
    }

    #[test]
    fn test_mode_conflict_display() {
        assert_eq!(
            CipherError::ModeConflict.to_string(),
            "Please select exactly one of encrypt or decrypt"
        );
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: CipherError = io_err.into();
        assert!(matches!(err, CipherError::Io(_)));
    }
}
