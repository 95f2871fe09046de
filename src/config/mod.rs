//! Configuration module for classic-ciphers
//!
//! This module provides configuration management including:
//! - XDG-compliant path resolution
//! - User settings persistence (default key, output file)

pub mod paths;
pub mod settings;

pub use paths::CipherPaths;
pub use settings::Settings;
