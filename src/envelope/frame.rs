//! Binary layout of a sealed envelope
//!
//! ```text
//! +------+-------------+------------------------------+
//! | type | nonce (12)  | ciphertext || GCM tag (16)   |
//! +------+-------------+------------------------------+
//! ```

use crate::crypto::{NONCE_SIZE, TAG_SIZE};
use crate::error::{VaultError, VaultResult};

/// Bytes before the ciphertext: type tag and nonce
pub const HEADER_LEN: usize = 1 + NONCE_SIZE;

/// Smallest well-formed envelope (empty plaintext)
pub const MIN_LEN: usize = HEADER_LEN + TAG_SIZE;

/// A parsed envelope borrowing its ciphertext from the raw bytes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame<'a> {
    /// Message type discriminator
    pub message_type: u8,
    /// AES-GCM nonce
    pub nonce: [u8; NONCE_SIZE],
    /// Ciphertext with the authentication tag appended
    pub ciphertext: &'a [u8],
}

impl<'a> Frame<'a> {
    /// Split raw bytes into their envelope parts
    ///
    /// Only the framing is checked here; the type tag is checked by the
    /// caller that knows which message it expects.
    pub fn parse(bytes: &'a [u8]) -> VaultResult<Self> {
        let (&message_type, rest) = bytes
            .split_first()
            .ok_or_else(|| VaultError::malformed("empty envelope"))?;

        if bytes.len() < MIN_LEN {
            return Err(VaultError::malformed(format!(
                "envelope too short: {} bytes (minimum {})",
                bytes.len(),
                MIN_LEN
            )));
        }

        let (nonce_bytes, ciphertext) = rest.split_at(NONCE_SIZE);
        let mut nonce = [0u8; NONCE_SIZE];
        nonce.copy_from_slice(nonce_bytes);

        Ok(Self {
            message_type,
            nonce,
            ciphertext,
        })
    }

    /// Serialize the frame back into raw bytes
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(HEADER_LEN + self.ciphertext.len());
        bytes.push(self.message_type);
        bytes.extend_from_slice(&self.nonce);
        bytes.extend_from_slice(self.ciphertext);
        bytes
    }
}
