//! End-to-end tests for the vault-decode binary

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

use vault_decode::backup::encrypt_backup;
use vault_decode::codec::base62;
use vault_decode::crypto::{derive_key, seal};
use vault_decode::envelope::Frame;
use vault_decode::vault::{VaultRecord, VAULT_MESSAGE_TYPE};

const EXPECTED_JSON: &str = r#"{
  "privHex": "1a2b",
  "privDec": "6699",
  "subs": [
    "x"
  ],
  "secrets": [
    "y"
  ]
}
"#;

fn sample_backup(passphrase: &str) -> String {
    let record = VaultRecord::new("1a2b", vec!["x".into()], vec!["y".into()]);
    encrypt_backup(&record, passphrase).unwrap()
}

/// Command isolated from the user's config and log settings
fn vault_decode(config_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("vault-decode").unwrap();
    cmd.env("VAULT_DECODE_CONFIG_DIR", config_dir.path())
        .env_remove("VAULT_DECODE_CONFIG")
        .env_remove("VAULT_DECODE_LOG");
    cmd
}

#[test]
fn test_decrypts_literal_backup() {
    let config = TempDir::new().unwrap();

    vault_decode(&config)
        .args([sample_backup("correct horse").as_str(), "correct horse"])
        .assert()
        .success()
        .stdout(EXPECTED_JSON)
        .stderr("");
}

#[test]
fn test_decrypts_backup_file() {
    let config = TempDir::new().unwrap();
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("vault.txt");

    // Wrapped the way a pasted backup usually is
    let text = sample_backup("pw");
    let wrapped: Vec<&str> = text
        .as_bytes()
        .chunks(40)
        .map(|chunk| std::str::from_utf8(chunk).unwrap())
        .collect();
    fs::write(&path, wrapped.join("\n") + "\n").unwrap();

    vault_decode(&config)
        .arg(&path)
        .arg("pw")
        .assert()
        .success()
        .stdout(EXPECTED_JSON);
}

#[test]
fn test_decrypts_backup_file_with_byte_order_mark() {
    let config = TempDir::new().unwrap();
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("vault.txt");
    fs::write(&path, format!("\u{feff}{}\r\n", sample_backup("pw"))).unwrap();

    vault_decode(&config)
        .arg(&path)
        .arg("pw")
        .assert()
        .success()
        .stdout(EXPECTED_JSON);
}

#[test]
fn test_hyphen_is_a_literal_password() {
    let config = TempDir::new().unwrap();

    vault_decode(&config)
        .args([sample_backup("-").as_str(), "-"])
        .assert()
        .success()
        .stdout(EXPECTED_JSON);
}

#[test]
fn test_wrong_password() {
    let config = TempDir::new().unwrap();

    vault_decode(&config)
        .args([sample_backup("right").as_str(), "wrong"])
        .assert()
        .code(2)
        .stdout("")
        .stderr(predicate::str::contains(
            "Invalid password: unable to decrypt backup with the provided passphrase.",
        ));
}

#[test]
fn test_invalid_symbol() {
    let config = TempDir::new().unwrap();

    vault_decode(&config)
        .args(["abc-def", "pw"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Failed to decrypt vault: Invalid Base62"));
}

#[test]
fn test_malformed_blob() {
    let config = TempDir::new().unwrap();

    vault_decode(&config)
        .args(["1", "pw"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Failed to decrypt vault: Malformed backup"))
        .stderr(predicate::str::contains("Invalid password").not());
}

#[test]
fn test_empty_result() {
    let config = TempDir::new().unwrap();

    let key = derive_key("pw");
    let (nonce, ciphertext) = seal(b"null", &[VAULT_MESSAGE_TYPE], &key).unwrap();
    let frame = Frame {
        message_type: VAULT_MESSAGE_TYPE,
        nonce,
        ciphertext: &ciphertext,
    };
    let text = base62::encode(&frame.to_bytes());

    vault_decode(&config)
        .args([text.as_str(), "pw"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Vault decrypted but result is empty"));
}

#[test]
fn test_missing_arguments() {
    let config = TempDir::new().unwrap();

    vault_decode(&config)
        .arg("only-one")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn test_help_exits_zero() {
    let config = TempDir::new().unwrap();

    vault_decode(&config)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("BACKUP_OR_PATH"));
}

#[test]
fn test_broken_config_is_unexpected_error() {
    let config = TempDir::new().unwrap();
    fs::write(config.path().join("config.json"), "{ not json").unwrap();

    vault_decode(&config)
        .args([sample_backup("pw").as_str(), "pw"])
        .assert()
        .code(1)
        .stderr(predicate::str::starts_with("Unexpected error:"));
}

#[test]
fn test_input_limit_from_config() {
    let config = TempDir::new().unwrap();
    fs::write(
        config.path().join("config.json"),
        r#"{"max_input_len": 10}"#,
    )
    .unwrap();

    vault_decode(&config)
        .args([sample_backup("pw").as_str(), "pw"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("too large"));
}

#[test]
fn test_explicit_config_flag() {
    let config = TempDir::new().unwrap();
    let other = TempDir::new().unwrap();
    let settings = other.path().join("strict.json");
    fs::write(&settings, r#"{"max_input_len": 10}"#).unwrap();

    vault_decode(&config)
        .arg("--config")
        .arg(&settings)
        .args([sample_backup("pw").as_str(), "pw"])
        .assert()
        .code(2);
}
