//! AES-256-GCM encryption/decryption
//!
//! Authenticated encryption for backup payloads. Associated data is
//! authenticated but not encrypted; the envelope binds its type tag there.

use aes_gcm::aead::rand_core::RngCore;
use aes_gcm::{
    aead::{Aead, KeyInit, OsRng, Payload},
    Aes256Gcm, Nonce,
};

use crate::error::{VaultError, VaultResult};

use super::DerivedKey;

/// Size of the AES-GCM nonce in bytes (96 bits)
pub const NONCE_SIZE: usize = 12;

/// Size of the AES-GCM authentication tag in bytes
pub const TAG_SIZE: usize = 16;

fn cipher(key: &DerivedKey) -> VaultResult<Aes256Gcm> {
    Aes256Gcm::new_from_slice(key.as_bytes())
        .map_err(|e| VaultError::Encryption(format!("Failed to create cipher: {}", e)))
}

/// Encrypt `plaintext` under a fresh random nonce
///
/// Returns the nonce and the ciphertext with its tag appended.
pub fn seal(
    plaintext: &[u8],
    aad: &[u8],
    key: &DerivedKey,
) -> VaultResult<([u8; NONCE_SIZE], Vec<u8>)> {
    let cipher = cipher(key)?;

    let mut nonce_bytes = [0u8; NONCE_SIZE];
    OsRng.fill_bytes(&mut nonce_bytes);
    let nonce = Nonce::from_slice(&nonce_bytes);

    let ciphertext = cipher
        .encrypt(
            nonce,
            Payload {
                msg: plaintext,
                aad,
            },
        )
        .map_err(|e| VaultError::Encryption(format!("Encryption failed: {}", e)))?;

    Ok((nonce_bytes, ciphertext))
}

/// Decrypt and authenticate `ciphertext` (tag appended)
///
/// Any integrity failure, whether from a wrong key or altered bytes, is
/// reported as [`VaultError::AuthenticationFailed`].
pub fn open(
    nonce: &[u8; NONCE_SIZE],
    ciphertext: &[u8],
    aad: &[u8],
    key: &DerivedKey,
) -> VaultResult<Vec<u8>> {
    let cipher = cipher(key)?;

    cipher
        .decrypt(
            Nonce::from_slice(nonce),
            Payload {
                msg: ciphertext,
                aad,
            },
        )
        .map_err(|_| VaultError::AuthenticationFailed)
}
