//! Passphrase to key derivation
//!
//! Backup keys are the SHA-256 digest of the UTF-8 passphrase. There is no
//! salt: the same passphrase must always open the same backup.

use sha2::{Digest, Sha256};
use zeroize::ZeroizeOnDrop;

/// Length of a derived key in bytes (AES-256)
pub const KEY_LENGTH: usize = 32;

/// A derived encryption key
///
/// Key material is zeroized on drop and never printed.
#[derive(Clone, ZeroizeOnDrop)]
pub struct DerivedKey {
    key: [u8; KEY_LENGTH],
}

impl DerivedKey {
    /// Get the key bytes
    pub fn as_bytes(&self) -> &[u8; KEY_LENGTH] {
        &self.key
    }
}

impl std::fmt::Debug for DerivedKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DerivedKey")
            .field("key", &"[REDACTED]")
            .finish()
    }
}

/// Derive a backup key from a passphrase
pub fn derive_key(passphrase: &str) -> DerivedKey {
    let digest = Sha256::digest(passphrase.as_bytes());

    let mut key = [0u8; KEY_LENGTH];
    key.copy_from_slice(&digest);

    DerivedKey { key }
}
