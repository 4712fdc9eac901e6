//! Authenticated message envelope
//!
//! An envelope carries one typed message: a type tag, then the AES-256-GCM
//! encryption of the message payload. The tag is also bound as associated
//! data, so a relabelled envelope fails authentication.
//!
//! Message types register themselves by implementing [`Message`]; opening
//! an envelope is generic over the expected type:
//!
//! ```rust,ignore
//! let record: Option<VaultRecord> = envelope::open(&raw, &key)?;
//! ```

pub mod frame;

use tracing::debug;
use zeroize::Zeroizing;

use crate::crypto::{self, DerivedKey};
use crate::error::{VaultError, VaultResult};

pub use frame::Frame;

/// A message type that can travel inside an envelope
pub trait Message: Sized {
    /// Type discriminator written in the envelope header
    const MESSAGE_TYPE: u8;

    /// Build the message from decrypted payload bytes
    ///
    /// `Ok(None)` means the payload authenticated but carries no message.
    fn from_payload(payload: &[u8]) -> VaultResult<Option<Self>>;

    /// Serialize the message into payload bytes
    fn to_payload(&self) -> VaultResult<Vec<u8>>;
}

/// Open an envelope holding a message of type `M`
///
/// # Errors
///
/// - [`VaultError::MalformedBlob`] if the framing is invalid, the type tag
///   is not `M::MESSAGE_TYPE`, or the payload does not describe an `M`
/// - [`VaultError::AuthenticationFailed`] if the key is wrong or the bytes
///   were altered
pub fn open<M: Message>(raw: &[u8], key: &DerivedKey) -> VaultResult<Option<M>> {
    let frame = Frame::parse(raw)?;

    if frame.message_type != M::MESSAGE_TYPE {
        return Err(VaultError::malformed(format!(
            "unexpected message type {} (expected {})",
            frame.message_type,
            M::MESSAGE_TYPE
        )));
    }

    debug!(
        message_type = frame.message_type,
        ciphertext_len = frame.ciphertext.len(),
        "opening envelope"
    );

    let payload = Zeroizing::new(crypto::open(
        &frame.nonce,
        frame.ciphertext,
        &[frame.message_type],
        key,
    )?);

    M::from_payload(&payload)
}

/// Seal a message into a new envelope
pub fn seal<M: Message>(message: &M, key: &DerivedKey) -> VaultResult<Vec<u8>> {
    let payload = Zeroizing::new(message.to_payload()?);
    let (nonce, ciphertext) = crypto::seal(&payload, &[M::MESSAGE_TYPE], key)?;

    let frame = Frame {
        message_type: M::MESSAGE_TYPE,
        nonce,
        ciphertext: &ciphertext,
    };
    Ok(frame.to_bytes())
}
