//! Backup restoration
//!
//! Turns backup text and a passphrase back into a [`VaultRecord`].

use tracing::debug;

use crate::codec::base62;
use crate::config::Settings;
use crate::crypto::derive_key;
use crate::envelope;
use crate::error::{VaultError, VaultResult};
use crate::vault::VaultRecord;

/// Decrypt backup text with a passphrase
///
/// # Errors
///
/// - [`VaultError::EmptyInput`] / [`VaultError::InvalidSymbol`] for text
///   that is not base62
/// - [`VaultError::MalformedBlob`] when the bytes are not a vault envelope
/// - [`VaultError::AuthenticationFailed`] for a wrong passphrase or a
///   corrupted backup
/// - [`VaultError::EmptyResult`] when the envelope holds no record
pub fn decrypt_backup(text: &str, passphrase: &str) -> VaultResult<VaultRecord> {
    let raw = base62::decode(text)?;
    debug!(raw_len = raw.len(), "decoded base62 backup");

    let key = derive_key(passphrase);
    envelope::open::<VaultRecord>(&raw, &key)?.ok_or(VaultError::EmptyResult)
}

/// Restores backups under a size limit
///
/// Base62 decoding is quadratic in the text length, so untrusted input is
/// bounded before it reaches the codec.
#[derive(Debug, Clone)]
pub struct RestoreManager {
    max_input_len: usize,
}

impl RestoreManager {
    /// Create a new RestoreManager with an explicit limit (in symbols)
    pub fn new(max_input_len: usize) -> Self {
        Self { max_input_len }
    }

    /// Create a RestoreManager using the configured limit
    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(settings.max_input_len)
    }

    /// Decrypt backup text, rejecting oversized input first
    pub fn restore(&self, text: &str, passphrase: &str) -> VaultResult<VaultRecord> {
        let len = text.chars().filter(|&c| !base62::is_ignorable(c)).count();
        if len > self.max_input_len {
            return Err(VaultError::InputTooLarge {
                len,
                max: self.max_input_len,
            });
        }

        decrypt_backup(text, passphrase)
    }
}
