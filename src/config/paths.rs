//! Path management for vault-decode
//!
//! ## Path Resolution Order
//!
//! 1. `VAULT_DECODE_CONFIG_DIR` environment variable (if set)
//! 2. The platform config directory, e.g. `~/.config/vault-decode` on Linux,
//!    `~/Library/Application Support/vault-decode` on macOS and
//!    `%APPDATA%\vault-decode\config` on Windows

use std::path::{Path, PathBuf};

use directories::ProjectDirs;

use crate::error::VaultError;

/// Environment variable overriding the config directory
pub const CONFIG_DIR_ENV: &str = "VAULT_DECODE_CONFIG_DIR";

/// Manages the paths used by vault-decode
#[derive(Debug, Clone)]
pub struct VaultPaths {
    config_dir: PathBuf,
}

impl VaultPaths {
    /// Resolve paths from the environment
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined and no
    /// override is set.
    pub fn new() -> Result<Self, VaultError> {
        let config_dir = match std::env::var_os(CONFIG_DIR_ENV) {
            Some(custom) => PathBuf::from(custom),
            None => ProjectDirs::from("", "", "vault-decode")
                .map(|dirs| dirs.config_dir().to_path_buf())
                .ok_or_else(|| {
                    VaultError::Config("Could not determine config directory".into())
                })?,
        };

        Ok(Self { config_dir })
    }

    /// Create VaultPaths with a custom config directory (useful for testing)
    pub fn with_config_dir(config_dir: PathBuf) -> Self {
        Self { config_dir }
    }

    /// Get the config directory
    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.config_dir.join("config.json")
    }
}
