//! Custom error types for vault-decode
//!
//! This module defines the error hierarchy for the library using thiserror.
//! The binary maps these variants onto process exit codes.

use thiserror::Error;

/// The main error type for vault-decode operations
#[derive(Error, Debug)]
pub enum VaultError {
    /// The encoded text was empty after whitespace removal
    #[error("Empty Base62 input")]
    EmptyInput,

    /// A character outside the base62 alphabet was found
    #[error("Invalid Base62: unexpected character {symbol:?} at position {position}")]
    InvalidSymbol { symbol: char, position: usize },

    /// The encoded text exceeds the configured size limit
    #[error("Backup is too large: {len} characters (limit {max})")]
    InputTooLarge { len: usize, max: usize },

    /// The raw bytes are not a valid envelope for the expected record type
    #[error("Malformed backup: {0}")]
    MalformedBlob(String),

    /// The authenticated decryption integrity check failed
    #[error("Invalid password")]
    AuthenticationFailed,

    /// Decryption succeeded but the payload held no record
    #[error("Vault decrypted but result is empty")]
    EmptyResult,

    /// The private value in the record is not a hexadecimal string
    #[error("Invalid private value: {0}")]
    InvalidPrivateValue(String),

    /// Encryption errors (sealing a new backup)
    #[error("Encryption error: {0}")]
    Encryption(String),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),
}

impl VaultError {
    /// Create a "malformed blob" error
    pub fn malformed(reason: impl Into<String>) -> Self {
        Self::MalformedBlob(reason.into())
    }

    /// Check if this is a wrong-password (authentication) failure
    pub fn is_authentication_failure(&self) -> bool {
        matches!(self, Self::AuthenticationFailed)
    }

    /// Check if this error came from reading or decrypting a backup
    ///
    /// These are the deterministic failures the CLI reports as a failed
    /// decryption rather than as an unexpected error.
    pub fn is_decode_failure(&self) -> bool {
        matches!(
            self,
            Self::EmptyInput
                | Self::InvalidSymbol { .. }
                | Self::InputTooLarge { .. }
                | Self::MalformedBlob(_)
                | Self::AuthenticationFailed
                | Self::InvalidPrivateValue(_)
        )
    }
}

impl From<serde_json::Error> for VaultError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for vault-decode operations
pub type VaultResult<T> = Result<T, VaultError>;
