//! CLI entry point for vault-decode
//!
//! Decrypts one backup and prints its report as JSON. Every library
//! failure is mapped onto an exit code here; nothing is retried.

pub mod input;

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use tracing::debug;

use crate::backup::RestoreManager;
use crate::config::{Settings, VaultPaths};
use crate::error::{VaultError, VaultResult};
use crate::logging;
use crate::vault::VaultReport;

/// Recover a vault record from a base62 backup
#[derive(Parser, Debug)]
#[command(
    name = "vault-decode",
    version,
    about = "Recover a vault record from a password-encrypted base62 backup",
    long_about = "Decodes a base62 backup (given literally or as a file path), \
                  decrypts it with the password and prints the vault record \
                  as JSON."
)]
pub struct Cli {
    /// Backup text, or the path of a file containing it
    #[arg(value_name = "BACKUP_OR_PATH")]
    pub backup: String,

    /// Backup password
    #[arg(
        value_name = "PASSWORD",
        allow_hyphen_values = true,
        required_unless_present = "prompt"
    )]
    pub password: Option<String>,

    /// Read the password from a hidden prompt instead of PASSWORD
    #[arg(long, hide = true, conflicts_with = "password")]
    pub prompt: bool,

    /// Settings file (defaults to config.json in the config directory)
    #[arg(long, value_name = "FILE", env = "VAULT_DECODE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

/// Process exit status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exit {
    /// Report printed
    Success = 0,
    /// Bad arguments or an unexpected failure
    Usage = 1,
    /// The backup could not be decoded or decrypted
    DecryptFailed = 2,
    /// Decryption succeeded without a record
    EmptyResult = 3,
}

impl From<Exit> for ExitCode {
    fn from(exit: Exit) -> Self {
        ExitCode::from(exit as u8)
    }
}

/// Run the CLI
///
/// Expected failures are reported on stderr and returned as an [`Exit`];
/// the `Err` case is reserved for unexpected ones.
pub fn run(cli: &Cli) -> Result<Exit> {
    let settings = load_settings(cli)?;
    logging::init_tracing(&logging::filter_directive(cli.verbose, &settings.log_level));
    debug!(?settings, "loaded settings");

    let text = input::resolve_backup(&cli.backup);
    let password = input::resolve_password(cli.password.as_deref())?;

    let manager = RestoreManager::from_settings(&settings);
    let outcome = manager
        .restore(&text, &password)
        .and_then(|record| VaultReport::from_record(&record));

    match outcome {
        Ok(report) => {
            write_report(&mut io::stdout().lock(), &report)?;
            Ok(Exit::Success)
        }
        Err(err) => match failure_message(&err) {
            Some((exit, message)) => {
                eprintln!("{}", message);
                Ok(exit)
            }
            None => Err(err.into()),
        },
    }
}

/// Write the report as pretty JSON followed by a newline
///
/// Write failures (a closed pipe, say) are returned rather than panicking.
fn write_report(out: &mut impl Write, report: &VaultReport) -> Result<()> {
    writeln!(out, "{}", report.to_pretty_json()?).context("Failed to write report")?;
    out.flush().context("Failed to write report")?;
    Ok(())
}

/// Load settings from `--config`, or from the config directory
///
/// An undeterminable config directory means defaults.
fn load_settings(cli: &Cli) -> VaultResult<Settings> {
    match &cli.config {
        Some(path) => Settings::load_from(path),
        None => match VaultPaths::new() {
            Ok(paths) => Settings::load(&paths),
            Err(_) => Ok(Settings::default()),
        },
    }
}

/// Map an expected failure to its exit code and user-facing message
pub fn failure_message(err: &VaultError) -> Option<(Exit, String)> {
    match err {
        VaultError::AuthenticationFailed => Some((
            Exit::DecryptFailed,
            "Invalid password: unable to decrypt backup with the provided passphrase.".to_string(),
        )),
        VaultError::EmptyResult => Some((
            Exit::EmptyResult,
            "Vault decrypted but result is empty".to_string(),
        )),
        err if err.is_decode_failure() => Some((
            Exit::DecryptFailed,
            format!("Failed to decrypt vault: {}", err),
        )),
        _ => None,
    }
}
