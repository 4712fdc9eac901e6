//! The decrypted vault record
//!
//! On the wire the payload is a compact JSON object with one-letter keys:
//! `p` (private value, hex), `u` (subscriber ids) and `s` (secrets). It is
//! read into a private wire struct and copied field by field into
//! [`VaultRecord`], so a record only exists when every field was present.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::error::Category;

use crate::envelope::Message;
use crate::error::{VaultError, VaultResult};

/// Message type of a vault backup
pub const VAULT_MESSAGE_TYPE: u8 = 1;

/// A recovered vault
#[derive(Clone, PartialEq, Eq)]
pub struct VaultRecord {
    /// Private value as a hexadecimal string, exactly as stored
    pub priv_hex: String,
    /// Subscriber identifiers
    pub subscribers: Vec<String>,
    /// Secret strings
    pub secrets: Vec<String>,
}

impl VaultRecord {
    /// Create a new record
    pub fn new(
        priv_hex: impl Into<String>,
        subscribers: Vec<String>,
        secrets: Vec<String>,
    ) -> Self {
        Self {
            priv_hex: priv_hex.into(),
            subscribers,
            secrets,
        }
    }
}

// Secret material stays out of Debug output
impl fmt::Debug for VaultRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VaultRecord")
            .field("priv_hex", &"[REDACTED]")
            .field("subscribers", &self.subscribers)
            .field("secrets", &format_args!("[{} REDACTED]", self.secrets.len()))
            .finish()
    }
}

#[derive(Deserialize)]
struct VaultPayload {
    p: String,
    u: Vec<String>,
    s: Vec<String>,
}

#[derive(Serialize)]
struct VaultPayloadRef<'a> {
    p: &'a str,
    u: &'a [String],
    s: &'a [String],
}

impl From<VaultPayload> for VaultRecord {
    fn from(payload: VaultPayload) -> Self {
        Self {
            priv_hex: payload.p,
            subscribers: payload.u,
            secrets: payload.s,
        }
    }
}

fn payload_error(err: serde_json::Error) -> VaultError {
    // serde messages may quote field values, which are secret here
    let detail = match err.classify() {
        Category::Data => "unexpected vault fields",
        Category::Syntax | Category::Eof => "payload is not valid JSON",
        Category::Io => "unreadable payload",
    };
    VaultError::malformed(format!(
        "{} (line {}, column {})",
        detail,
        err.line(),
        err.column()
    ))
}

impl Message for VaultRecord {
    const MESSAGE_TYPE: u8 = VAULT_MESSAGE_TYPE;

    fn from_payload(payload: &[u8]) -> VaultResult<Option<Self>> {
        let payload: Option<VaultPayload> =
            serde_json::from_slice(payload).map_err(payload_error)?;
        Ok(payload.map(VaultRecord::from))
    }

    fn to_payload(&self) -> VaultResult<Vec<u8>> {
        let payload = VaultPayloadRef {
            p: &self.priv_hex,
            u: &self.subscribers,
            s: &self.secrets,
        };
        Ok(serde_json::to_vec(&payload)?)
    }
}
