//! Configuration module for vault-decode
//!
//! This module provides configuration management including:
//! - Config directory resolution
//! - User settings loading

pub mod paths;
pub mod settings;

pub use paths::VaultPaths;
pub use settings::Settings;
