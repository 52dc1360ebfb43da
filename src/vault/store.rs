//! High-level vault operations used by CLI commands.
//!
//! `VaultStore` wraps the record codec and the cipher layer so that
//! the rest of the application can work with simple method calls like
//! `store.add("github.com", "s3cr3t")`.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::crypto::Cipher;
use crate::errors::Result;
use crate::vault::codec;

/// The main vault handle.  Open one with `VaultStore::open`, then use
/// its methods to manage entries.
///
/// The cipher is bound for the lifetime of the store.  The vault file
/// carries no header identifying which cipher wrote it, so opening a
/// file with the wrong cipher does not fail — decryption produces
/// garbage bytes, and any garbage line that fails the `|` split is
/// silently dropped by the codec.
pub struct VaultStore {
    /// Path to the encrypted vault file on disk.
    path: PathBuf,

    /// The cipher bound to this session, selected once at startup.
    cipher: Cipher,

    /// In-memory map of site -> password.
    entries: BTreeMap<String, String>,
}

impl VaultStore {
    // ------------------------------------------------------------------
    // Construction
    // ------------------------------------------------------------------

    /// Open the vault at `path`, eagerly loading its contents.
    ///
    /// A missing or empty file is not an error — it yields an empty
    /// store, which is how a brand-new vault starts out.  Any other
    /// read failure (permissions, hardware) propagates.
    pub fn open(path: &Path, cipher: Cipher) -> Result<Self> {
        let entries = match fs::read(path) {
            Ok(ciphertext) => codec::decode(&cipher.decrypt(&ciphertext)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => return Err(e.into()),
        };

        Ok(Self {
            path: path.to_path_buf(),
            cipher,
            entries,
        })
    }

    // ------------------------------------------------------------------
    // Entry operations
    // ------------------------------------------------------------------

    /// Insert or overwrite the password for `site`, then persist the
    /// whole vault.
    ///
    /// Every add rewrites the full file — O(vault size) per call, which
    /// is fine at this scale.  No validation is applied to `site` or
    /// `password`; empty strings are allowed.
    pub fn add(&mut self, site: &str, password: &str) -> Result<()> {
        self.entries
            .insert(site.to_string(), password.to_string());
        self.save()
    }

    /// Look up the password for `site`.
    ///
    /// A miss is a normal outcome, not an error.
    pub fn get(&self, site: &str) -> Option<&str> {
        self.entries.get(site).map(String::as_str)
    }

    /// All site names in iteration order, without passwords.
    pub fn list_sites(&self) -> Vec<String> {
        self.entries.keys().cloned().collect()
    }

    // ------------------------------------------------------------------
    // Persistence
    // ------------------------------------------------------------------

    /// Serialize, encrypt, and write the vault, fully overwriting the
    /// previous file contents.
    ///
    /// The write is a plain overwrite, not a temp-file + rename: a
    /// crash mid-write can corrupt the vault.  Known limitation of the
    /// format, kept as-is.
    pub fn save(&self) -> Result<()> {
        let plaintext = codec::encode(&self.entries);
        fs::write(&self.path, self.cipher.encrypt(&plaintext))?;
        Ok(())
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    /// Returns the path to the vault file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the number of entries in the vault.
    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the vault has an entry for `site`.
    pub fn contains_site(&self, site: &str) -> bool {
        self.entries.contains_key(site)
    }
}
