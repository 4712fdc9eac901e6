//! User settings for vault-decode
//!
//! Settings live in a JSON file. Every field has a default, so a missing
//! file or a partial one is fine.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::paths::VaultPaths;
use crate::error::VaultError;

/// User settings for vault-decode
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Default log filter (e.g. "warn", "debug", "vault_decode=trace")
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Longest backup text accepted, in base62 symbols
    #[serde(default = "default_max_input_len")]
    pub max_input_len: usize,
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_max_input_len() -> usize {
    64 * 1024
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            max_input_len: default_max_input_len(),
        }
    }
}

impl Settings {
    /// Load settings from the default location, or defaults if absent
    pub fn load(paths: &VaultPaths) -> Result<Self, VaultError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            Self::load_from(&settings_path)
        } else {
            Ok(Settings::default())
        }
    }

    /// Load settings from a specific file, which must exist
    pub fn load_from(path: &Path) -> Result<Self, VaultError> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            VaultError::Config(format!(
                "Failed to read settings file {}: {}",
                path.display(),
                e
            ))
        })?;

        let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
            VaultError::Config(format!(
                "Failed to parse settings file {}: {}",
                path.display(),
                e
            ))
        })?;

        settings.validate()?;
        Ok(settings)
    }

    /// Check that the values are usable
    pub fn validate(&self) -> Result<(), VaultError> {
        if self.max_input_len == 0 {
            return Err(VaultError::Config(
                "max_input_len must be greater than zero".into(),
            ));
        }
        Ok(())
    }
}
