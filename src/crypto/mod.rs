//! Cryptographic functions for vault-decode
//!
//! Provides AES-256-GCM authenticated encryption keyed by a SHA-256
//! passphrase hash, the two capabilities a backup envelope relies on.

pub mod encryption;
pub mod key_derivation;

pub use encryption::{open, seal, NONCE_SIZE, TAG_SIZE};
pub use key_derivation::{derive_key, DerivedKey, KEY_LENGTH};
