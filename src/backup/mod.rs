//! Backup creation and restoration
//!
//! A backup is the base62 text of a sealed vault envelope:
//!
//! ```text
//! text --base62--> raw bytes --envelope--> VaultRecord
//! ```
//!
//! Every attempt is independent and keeps no state between calls.

pub mod create;
pub mod restore;

pub use create::encrypt_backup;
pub use restore::{decrypt_backup, RestoreManager};
