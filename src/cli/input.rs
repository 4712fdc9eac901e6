//! Command-line input resolution

use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;
use zeroize::Zeroizing;

/// Resolve the backup argument to backup text
///
/// An existing, readable regular file supplies its contents; anything else
/// is taken as the backup text itself.
pub fn resolve_backup(arg: &str) -> String {
    let path = Path::new(arg);
    if !path.is_file() {
        return arg.to_string();
    }

    match std::fs::read(path) {
        Ok(bytes) => {
            debug!(path = %path.display(), len = bytes.len(), "read backup from file");
            String::from_utf8_lossy(&bytes).into_owned()
        }
        Err(e) => {
            debug!(path = %path.display(), error = %e, "unreadable file, using argument as text");
            arg.to_string()
        }
    }
}

/// Resolve the password argument, prompting without echo when it is absent
///
/// A given argument is always the literal password, `-` included.
pub fn resolve_password(arg: Option<&str>) -> Result<Zeroizing<String>> {
    match arg {
        Some(password) => Ok(Zeroizing::new(password.to_string())),
        None => {
            let password =
                rpassword::prompt_password("Password: ").context("Failed to read password")?;
            Ok(Zeroizing::new(password))
        }
    }
}
