//! vault-decode - recover vault records from base62 backups
//!
//! A backup is a password-encrypted vault record, written as base62 text so
//! it can be copied by hand. Recovery is a two-stage pipeline:
//!
//! ```text
//! base62 text --codec--> raw bytes --envelope(key)--> VaultRecord
//! ```
//!
//! # Architecture
//!
//! - `codec`: exact base62 <-> bytes conversion, keeping leading zero bytes
//! - `crypto`: passphrase key derivation and AES-256-GCM
//! - `envelope`: typed, authenticated message frames
//! - `vault`: the record and its JSON report
//! - `backup`: the encrypt/decrypt pipeline
//! - `config`: settings and paths
//! - `cli`: the `vault-decode` command
//! - `error`: custom error types
//!
//! # Example
//!
//! ```rust
//! use vault_decode::backup::{decrypt_backup, encrypt_backup};
//! use vault_decode::vault::{VaultRecord, VaultReport};
//!
//! let record = VaultRecord::new("1a2b", vec!["x".into()], vec!["y".into()]);
//! let text = encrypt_backup(&record, "passphrase")?;
//!
//! let recovered = decrypt_backup(&text, "passphrase")?;
//! assert_eq!(VaultReport::from_record(&recovered)?.priv_dec, "6699");
//! # Ok::<(), vault_decode::VaultError>(())
//! ```

pub mod backup;
pub mod cli;
pub mod codec;
pub mod config;
pub mod crypto;
pub mod envelope;
pub mod error;
pub mod logging;
pub mod vault;

pub use error::{VaultError, VaultResult};
