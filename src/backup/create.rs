//! Backup creation
//!
//! Produces the base62 backup text for a record. The nonce is random, so
//! two backups of the same record differ.

use tracing::debug;

use crate::codec::base62;
use crate::crypto::derive_key;
use crate::envelope;
use crate::error::VaultResult;
use crate::vault::VaultRecord;

/// Encrypt a record under `passphrase` and encode it as base62 text
pub fn encrypt_backup(record: &VaultRecord, passphrase: &str) -> VaultResult<String> {
    let key = derive_key(passphrase);
    let raw = envelope::seal(record, &key)?;
    debug!(raw_len = raw.len(), "sealed vault envelope");

    Ok(base62::encode(&raw))
}
