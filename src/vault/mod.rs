//! Vault records recovered from backups
//!
//! - `record`: the decrypted record and its envelope payload format
//! - `report`: the JSON view printed by the CLI

pub mod record;
pub mod report;

pub use record::{VaultRecord, VAULT_MESSAGE_TYPE};
pub use report::{hex_to_decimal, VaultReport};
