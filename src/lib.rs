//! classic-ciphers - classical text ciphers from the command line
//!
//! This library implements five pre-modern ciphers over the lowercase
//! alphabet, each with an encrypt and a decrypt operation:
//! Caesar shift, random substitution, polyalphabetic (Vigenère),
//! columnar transposition and Atbash. None of them offer real security;
//! they are meant for study and puzzles.
//!
//! # Architecture
//!
//! - `alphabet`: the shared alphabet and normalization helpers
//! - `ciphers`: the five cipher transforms
//! - `engine`: dispatches a request to the right transform
//! - `error`: custom error types
//! - `config`: configuration and path management
//! - `storage`: reading messages and writing results
//! - `cli`: command handlers for the `ciphers` binary
//!
//! # Example
//!
//! ```
//! use classic_ciphers::ciphers::{CipherKind, Direction};
//! use classic_ciphers::engine::{CipherEngine, CipherKey, CipherRequest};
//!
//! let mut engine = CipherEngine::new();
//! let request = CipherRequest::new(
//!     CipherKind::Caesar,
//!     Direction::Encrypt,
//!     CipherKey::Numeric(3),
//!     "hello",
//! );
//! assert_eq!(engine.process(&request).unwrap().text, "khoor");
//! ```

pub mod alphabet;
pub mod ciphers;
pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod storage;

pub use ciphers::{CipherKind, Direction};
pub use engine::{CipherEngine, CipherKey, CipherOutput, CipherRequest};
pub use error::{CipherError, CipherResult};
