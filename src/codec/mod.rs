//! Text encodings for backup blobs
//!
//! Backups are exchanged as base62 text. The conversion is an exact
//! big-number change of base that also keeps leading zero bytes, so a
//! backup decodes to precisely the byte string that was encoded.

pub mod base62;
pub(crate) mod radix;

pub use base62::{decode, encode, is_ignorable, ALPHABET};
