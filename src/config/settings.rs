use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::crypto::{Cipher, CipherKind};
use crate::errors::{PassVaultError, Result};

/// Project-level configuration, loaded from `.passvault.toml`.
///
/// Every field has a default matching the original tool's behavior, so
/// PassVault works out-of-the-box without any config file at all.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// The master secret gating vault access.
    ///
    /// Stored in plaintext and compared directly — a documented weak
    /// point of the scheme, not something the config layer fixes.
    #[serde(default = "default_master_secret")]
    pub master_secret: String,

    /// Vault file name (relative paths resolve against the working
    /// directory).
    #[serde(default = "default_vault_file")]
    pub vault_file: String,

    /// Which cipher to use when none is selected on the command line.
    #[serde(default = "default_cipher")]
    pub cipher: CipherKind,

    /// Key byte for the xor cipher, written as a character.
    #[serde(default = "default_xor_key")]
    pub xor_key: char,

    /// Rotation amount for the shift cipher (0-25).
    #[serde(default = "default_shift")]
    pub shift: u8,
}

// ── Serde default helpers ────────────────────────────────────────────

fn default_master_secret() -> String {
    "admin123".to_string()
}

fn default_vault_file() -> String {
    "vault.secure".to_string()
}

fn default_cipher() -> CipherKind {
    CipherKind::Xor
}

fn default_xor_key() -> char {
    'P'
}

fn default_shift() -> u8 {
    3
}

// ── Implementation ───────────────────────────────────────────────────

impl Default for Settings {
    fn default() -> Self {
        Self {
            master_secret: default_master_secret(),
            vault_file: default_vault_file(),
            cipher: default_cipher(),
            xor_key: default_xor_key(),
            shift: default_shift(),
        }
    }
}

impl Settings {
    /// Name of the config file we look for in the working directory.
    const FILE_NAME: &'static str = ".passvault.toml";

    /// Load settings from `<project_dir>/.passvault.toml`.
    ///
    /// If the file does not exist, defaults are returned.  If the file
    /// exists but cannot be parsed, an error is returned.
    pub fn load(project_dir: &Path) -> Result<Self> {
        let config_path = project_dir.join(Self::FILE_NAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&config_path)?;

        let settings: Settings = toml::from_str(&contents).map_err(|e| {
            PassVaultError::ConfigError(format!("Failed to parse {}: {e}", config_path.display()))
        })?;

        Ok(settings)
    }

    /// Build the full vault file path, resolving a relative
    /// `vault_file` against `project_dir`.
    pub fn vault_path(&self, project_dir: &Path) -> PathBuf {
        let file = Path::new(&self.vault_file);
        if file.is_absolute() {
            file.to_path_buf()
        } else {
            project_dir.join(file)
        }
    }

    /// Build the configured cipher from the `cipher`/`xor_key`/`shift`
    /// fields, validating the parameters.
    pub fn cipher(&self) -> Result<Cipher> {
        match self.cipher {
            CipherKind::Xor => {
                if !self.xor_key.is_ascii() {
                    return Err(PassVaultError::InvalidXorKey(self.xor_key));
                }
                Ok(Cipher::stream_xor(self.xor_key as u8))
            }
            CipherKind::Shift => Cipher::shift(self.shift),
        }
    }
}

// ── Tests ────────────────────────────────────────────────────────────
