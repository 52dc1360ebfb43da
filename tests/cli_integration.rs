//! Integration tests for the PassVault CLI.
//!
//! These tests exercise the binary end-to-end using `assert_cmd`.
//! The master password is supplied through `PASSVAULT_MASTER` so no
//! interactive prompt is involved; with no `.passvault.toml` in the
//! temp working directory the default master secret applies.

use assert_cmd::Command;
use assert_fs::TempDir;
use predicates::prelude::*;

/// Helper: get a Command pointing at the passvault binary.
fn passvault() -> Command {
    #[allow(deprecated)]
    Command::cargo_bin("passvault").expect("binary should exist")
}

/// Default master secret when no config file overrides it.
const MASTER: &str = "admin123";

#[test]
fn help_flag_shows_usage() {
    passvault()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Local encrypted password vault"))
        .stdout(predicate::str::contains("add"))
        .stdout(predicate::str::contains("get"))
        .stdout(predicate::str::contains("list"))
        .stdout(predicate::str::contains("menu"));
}

#[test]
fn version_flag_shows_version() {
    passvault()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("passvault"));
}

#[test]
fn no_args_shows_help() {
    // Running with no subcommand should show an error or help.
    passvault()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn wrong_master_password_is_fatal() {
    let tmp = TempDir::new().unwrap();

    passvault()
        .args(["list"])
        .current_dir(tmp.path())
        .env("PASSVAULT_MASTER", "not-the-master")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Authentication failed"));
}

#[test]
fn add_get_list_roundtrip() {
    let tmp = TempDir::new().unwrap();
    let vault = tmp.path().join("vault.secure");
    let vault = vault.to_str().unwrap();

    // Add a password (inline value, non-interactive).
    passvault()
        .args(["add", "github.com", "s3cr3t", "--vault", vault])
        .current_dir(tmp.path())
        .env("PASSVAULT_MASTER", MASTER)
        .assert()
        .success()
        .stdout(predicate::str::contains("github.com"));

    // Get it back.
    passvault()
        .args(["get", "github.com", "--vault", vault])
        .current_dir(tmp.path())
        .env("PASSVAULT_MASTER", MASTER)
        .assert()
        .success()
        .stdout(predicate::str::contains("s3cr3t"));

    // List shows the site but never the password.
    passvault()
        .args(["list", "--vault", vault])
        .current_dir(tmp.path())
        .env("PASSVAULT_MASTER", MASTER)
        .assert()
        .success()
        .stdout(predicate::str::contains("github.com"))
        .stdout(predicate::str::contains("s3cr3t").not());
}

#[test]
fn add_reads_password_from_piped_stdin() {
    let tmp = TempDir::new().unwrap();
    let vault = tmp.path().join("vault.secure");
    let vault = vault.to_str().unwrap();

    passvault()
        .args(["add", "pipe.example", "--vault", vault])
        .current_dir(tmp.path())
        .env("PASSVAULT_MASTER", MASTER)
        .write_stdin("piped-pw\n")
        .assert()
        .success();

    passvault()
        .args(["get", "pipe.example", "--vault", vault])
        .current_dir(tmp.path())
        .env("PASSVAULT_MASTER", MASTER)
        .assert()
        .success()
        .stdout(predicate::str::contains("piped-pw"));
}

#[test]
fn get_on_missing_site_succeeds_with_message() {
    let tmp = TempDir::new().unwrap();
    let vault = tmp.path().join("vault.secure");

    passvault()
        .args(["get", "nowhere.example", "--vault", vault.to_str().unwrap()])
        .current_dir(tmp.path())
        .env("PASSVAULT_MASTER", MASTER)
        .assert()
        .success()
        .stdout(predicate::str::contains("No password stored"));
}

#[test]
fn shift_cipher_roundtrip_via_flags() {
    let tmp = TempDir::new().unwrap();
    let vault = tmp.path().join("vault.secure");
    let vault = vault.to_str().unwrap();

    passvault()
        .args([
            "add", "caesar.example", "veni-vidi", "--vault", vault, "--cipher", "shift",
            "--shift", "13",
        ])
        .current_dir(tmp.path())
        .env("PASSVAULT_MASTER", MASTER)
        .assert()
        .success();

    passvault()
        .args([
            "get", "caesar.example", "--vault", vault, "--cipher", "shift", "--shift", "13",
        ])
        .current_dir(tmp.path())
        .env("PASSVAULT_MASTER", MASTER)
        .assert()
        .success()
        .stdout(predicate::str::contains("veni-vidi"));
}

#[test]
fn wrong_cipher_on_load_does_not_crash() {
    let tmp = TempDir::new().unwrap();
    let vault = tmp.path().join("vault.secure");
    let vault = vault.to_str().unwrap();

    passvault()
        .args(["add", "github.com", "s3cr3t", "--vault", vault])
        .current_dir(tmp.path())
        .env("PASSVAULT_MASTER", MASTER)
        .assert()
        .success();

    // Decrypting xor ciphertext with the shift cipher yields garbage;
    // the tool tolerates it and the entry simply is not found.
    passvault()
        .args([
            "get", "github.com", "--vault", vault, "--cipher", "shift", "--shift", "3",
        ])
        .current_dir(tmp.path())
        .env("PASSVAULT_MASTER", MASTER)
        .assert()
        .success()
        .stdout(predicate::str::contains("s3cr3t").not());
}

#[test]
fn out_of_range_shift_is_rejected() {
    let tmp = TempDir::new().unwrap();

    passvault()
        .args(["list", "--cipher", "shift", "--shift", "26"])
        .current_dir(tmp.path())
        .env("PASSVAULT_MASTER", MASTER)
        .assert()
        .failure();
}

#[test]
fn config_file_sets_master_secret_and_vault_file() {
    let tmp = TempDir::new().unwrap();
    let config = r#"
master_secret = "correct horse"
vault_file = "creds.secure"
"#;
    std::fs::write(tmp.path().join(".passvault.toml"), config).unwrap();

    // The default master secret no longer works.
    passvault()
        .args(["list"])
        .current_dir(tmp.path())
        .env("PASSVAULT_MASTER", MASTER)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Authentication failed"));

    // The configured one does, and the vault lands in creds.secure.
    passvault()
        .args(["add", "site", "pw"])
        .current_dir(tmp.path())
        .env("PASSVAULT_MASTER", "correct horse")
        .assert()
        .success();
    assert!(tmp.path().join("creds.secure").exists());
}
