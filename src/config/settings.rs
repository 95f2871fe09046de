//! User settings for classic-ciphers
//!
//! Stores the default numeric key and where results are written.

use serde::{Deserialize, Serialize};

use super::paths::CipherPaths;
use crate::ciphers::shift::MAX_SHIFT;
use crate::error::CipherError;

/// User settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Numeric key used when `--key` is not given
    #[serde(default = "default_key")]
    pub default_key: i64,

    /// File the result is written to when `--output` is not given
    #[serde(default = "default_output_file")]
    pub output_file: String,

    /// Whether results are written to a file at all
    #[serde(default = "default_write_output_file")]
    pub write_output_file: bool,
}

fn default_schema_version() -> u32 {
    1
}

fn default_key() -> i64 {
    4
}

fn default_output_file() -> String {
    "outputMessage.txt".to_string()
}

fn default_write_output_file() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            default_key: default_key(),
            output_file: default_output_file(),
            write_output_file: default_write_output_file(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or use defaults if the file doesn't exist
    pub fn load_or_create(paths: &CipherPaths) -> Result<Self, CipherError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            // Don't save yet - let caller decide when to persist
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| CipherError::Io(format!("Failed to read settings file: {}", e)))?;

        let settings: Settings = serde_json::from_str(&contents)
            .map_err(|e| CipherError::Config(format!("Failed to parse settings file: {}", e)))?;

        settings.validate()?;
        Ok(settings)
    }

    /// Save settings to disk
    pub fn save(&self, paths: &CipherPaths) -> Result<(), CipherError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| CipherError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| CipherError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }

    /// Reject values the cipher layer would refuse anyway
    pub fn validate(&self) -> Result<(), CipherError> {
        if !(0..=MAX_SHIFT).contains(&self.default_key) {
            return Err(CipherError::Config(format!(
                "default_key {} is outside the range 0-{}",
                self.default_key, MAX_SHIFT
            )));
        }
        if self.output_file.trim().is_empty() {
            return Err(CipherError::Config("output_file must not be empty".into()));
        }
        Ok(())
    }
}
