//! CLI module — Clap argument parser, output helpers, and command implementations.

pub mod commands;
pub mod output;

use std::path::PathBuf;

use clap::Parser;
use zeroize::Zeroizing;

use crate::auth::AuthGate;
use crate::config::Settings;
use crate::crypto::{Cipher, CipherKind};
use crate::errors::{PassVaultError, Result};
use crate::vault::VaultStore;

/// PassVault CLI: local encrypted password vault.
#[derive(Parser)]
#[command(
    name = "passvault",
    about = "Local encrypted password vault",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Vault file path (default: vault.secure, or the config value)
    #[arg(long, global = true)]
    pub vault: Option<String>,

    /// Cipher to encrypt the vault with
    #[arg(long, value_enum, global = true)]
    pub cipher: Option<CipherKind>,

    /// Key character for the xor cipher
    #[arg(long, global = true)]
    pub xor_key: Option<char>,

    /// Rotation amount for the shift cipher (0-25)
    #[arg(long, global = true, value_parser = clap::value_parser!(u8).range(0..26))]
    pub shift: Option<u8>,
}

/// All available subcommands.
#[derive(clap::Subcommand)]
pub enum Commands {
    /// Add or update a password (add is always an upsert)
    Add {
        /// Website or account name
        site: String,
        /// Password (omit for interactive prompt)
        password: Option<String>,
    },

    /// Print the password stored for a site
    Get {
        /// Website or account name
        site: String,
    },

    /// List all stored sites (never prints passwords)
    List,

    /// Interactive add/get/list loop
    Menu,
}

// ---------------------------------------------------------------------------
// Shared helpers used by multiple commands
// ---------------------------------------------------------------------------

/// Get the master password, trying in order:
/// 1. `PASSVAULT_MASTER` env var (scripts, CI)
/// 2. Interactive prompt
///
/// Returns `Zeroizing<String>` so the candidate is wiped from memory on drop.
pub fn prompt_master() -> Result<Zeroizing<String>> {
    if let Ok(pw) = std::env::var("PASSVAULT_MASTER") {
        if !pw.is_empty() {
            return Ok(Zeroizing::new(pw));
        }
    }

    let pw = dialoguer::Password::new()
        .with_prompt("Enter master password to unlock vault")
        .interact()
        .map_err(|e| PassVaultError::CommandFailed(format!("password prompt: {e}")))?;
    Ok(Zeroizing::new(pw))
}

/// Run the master-password gate.  A mismatch is fatal to the session —
/// there is no retry.
pub fn authenticate(settings: &Settings) -> Result<()> {
    let gate = AuthGate::new(&settings.master_secret);
    let candidate = prompt_master()?;

    if !gate.authenticate(&candidate) {
        return Err(PassVaultError::AuthenticationFailed);
    }
    Ok(())
}

/// Build the full path to the vault file from CLI args and settings.
pub fn vault_path(cli: &Cli, settings: &Settings) -> Result<PathBuf> {
    match &cli.vault {
        Some(path) => Ok(PathBuf::from(path)),
        None => {
            let cwd = std::env::current_dir()?;
            Ok(settings.vault_path(&cwd))
        }
    }
}

/// Build a cipher of the given kind, taking parameters from CLI flags
/// first and settings second.
pub fn build_cipher(kind: CipherKind, cli: &Cli, settings: &Settings) -> Result<Cipher> {
    match kind {
        CipherKind::Xor => {
            let key = cli.xor_key.unwrap_or(settings.xor_key);
            if !key.is_ascii() {
                return Err(PassVaultError::InvalidXorKey(key));
            }
            Ok(Cipher::stream_xor(key as u8))
        }
        CipherKind::Shift => Cipher::shift(cli.shift.unwrap_or(settings.shift)),
    }
}

/// Resolve the session cipher: `--cipher` wins, then the config value.
pub fn resolve_cipher(cli: &Cli, settings: &Settings) -> Result<Cipher> {
    let kind = cli.cipher.unwrap_or(settings.cipher);
    build_cipher(kind, cli, settings)
}

/// Open the vault with the resolved path and cipher.
pub fn open_store(cli: &Cli, settings: &Settings) -> Result<VaultStore> {
    let path = vault_path(cli, settings)?;
    let cipher = resolve_cipher(cli, settings)?;
    VaultStore::open(&path, cipher)
}
