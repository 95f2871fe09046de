//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the cipher engine.

pub mod prompt;
pub mod run;

pub use run::{handle_run, RunArgs};
