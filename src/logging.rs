//! Diagnostic logging
//!
//! Logs go to stderr so stdout carries only the JSON report. The filter
//! comes from `VAULT_DECODE_LOG` if set, otherwise from the `-v` count,
//! otherwise from the configured level.

use tracing_subscriber::EnvFilter;

/// Environment variable holding a full `EnvFilter` directive
pub const LOG_ENV: &str = "VAULT_DECODE_LOG";

/// Pick the filter directive for a verbosity count and configured level
pub fn filter_directive(verbosity: u8, configured: &str) -> String {
    match verbosity {
        0 => configured.to_string(),
        1 => "vault_decode=debug,warn".to_string(),
        _ => "vault_decode=trace,warn".to_string(),
    }
}

/// Initializes the tracing subscriber
pub fn init_tracing(directive: &str) {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(directive));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();
}
