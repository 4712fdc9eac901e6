//! JSON report of a recovered vault

use serde::Serialize;

use crate::codec::radix;
use crate::error::{VaultError, VaultResult};

use super::VaultRecord;

/// Printable view of a [`VaultRecord`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VaultReport {
    /// Private value, hex, as decrypted
    pub priv_hex: String,
    /// Private value as an unsigned decimal integer
    pub priv_dec: String,
    /// Subscriber identifiers, verbatim
    pub subs: Vec<String>,
    /// Secrets, verbatim
    pub secrets: Vec<String>,
}

impl VaultReport {
    /// Build the report for a record
    ///
    /// Fails with [`VaultError::InvalidPrivateValue`] when the private value
    /// is not a hexadecimal string.
    pub fn from_record(record: &VaultRecord) -> VaultResult<Self> {
        Ok(Self {
            priv_hex: record.priv_hex.clone(),
            priv_dec: hex_to_decimal(&record.priv_hex)?,
            subs: record.subscribers.clone(),
            secrets: record.secrets.clone(),
        })
    }

    /// Render as JSON with two-space indentation
    pub fn to_pretty_json(&self) -> VaultResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Render a hexadecimal string as an unsigned decimal integer
///
/// There is no width limit. Leading zeros are accepted; a `0x` prefix is
/// not. Errors never echo the offending character.
pub fn hex_to_decimal(hex: &str) -> VaultResult<String> {
    if hex.is_empty() {
        return Err(VaultError::InvalidPrivateValue("empty hex string".into()));
    }

    // Little-endian decimal digits
    let mut digits: Vec<u8> = Vec::with_capacity(hex.len() * 5 / 4 + 1);
    for (position, c) in hex.chars().enumerate() {
        let nibble = c.to_digit(16).ok_or_else(|| {
            VaultError::InvalidPrivateValue(format!("non-hex character at position {}", position))
        })?;
        radix::mul_add(&mut digits, 10, 16, nibble);
    }

    if digits.is_empty() {
        return Ok("0".to_string());
    }
    Ok(digits.iter().rev().map(|&d| char::from(b'0' + d)).collect())
}
