//! Storage layer for classic-ciphers
//!
//! Reads input messages and writes results to disk.

pub mod file_io;

pub use file_io::{read_message, read_message_from, write_text_atomic};
