//! Symmetric vault ciphers.
//!
//! A `Cipher` is selected once at startup and bound to the vault
//! session for its whole lifetime.  Both operations are total: any
//! byte sequence encrypts and decrypts without error, including empty
//! input, zero bytes, and non-ASCII data.
//!
//! Invariant: `decrypt(encrypt(x)) == x` for every byte sequence `x`.
//! The shift cipher additionally leaves non-alphabetic bytes untouched,
//! which is what keeps the `|` and `\n` record framing intact under
//! encryption (see `vault::codec`).

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::errors::{PassVaultError, Result};

/// Number of letters in the shift cipher's rotation alphabet.
const ALPHABET_LEN: u8 = 26;

/// Which cipher family to use, as named on the command line and in
/// `.passvault.toml`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum CipherKind {
    /// Byte-wise XOR with a fixed single-byte key.
    Xor,
    /// Caesar-style alphabet rotation, letters only.
    Shift,
}

/// A symmetric cipher together with its parameters.
///
/// Closed set of variants; `VaultStore` holds one by value and never
/// switches it mid-session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cipher {
    /// XOR every byte with `key`.  Self-inverse.
    StreamXor { key: u8 },

    /// Rotate ASCII letters forward by `shift` positions within their
    /// case's alphabet; all other bytes pass through unchanged.
    /// `shift` is always in `[0, 26)`.
    Shift { shift: u8 },
}

impl Cipher {
    /// Build a stream-XOR cipher.  Any key byte is valid, including 0
    /// (which makes encryption the identity).
    pub fn stream_xor(key: u8) -> Self {
        Self::StreamXor { key }
    }

    /// Build a shift cipher.  Rejects shifts of 26 or more so that a
    /// constructed cipher never holds an out-of-range rotation.
    pub fn shift(shift: u8) -> Result<Self> {
        if shift >= ALPHABET_LEN {
            return Err(PassVaultError::InvalidShift(shift));
        }
        Ok(Self::Shift { shift })
    }

    /// Encrypt a byte sequence.  Infallible; output length equals
    /// input length.
    pub fn encrypt(&self, data: &[u8]) -> Vec<u8> {
        match *self {
            Self::StreamXor { key } => data.iter().map(|&b| b ^ key).collect(),
            Self::Shift { shift } => data.iter().map(|&b| rotate(b, shift)).collect(),
        }
    }

    /// Decrypt a byte sequence produced by `encrypt` under the same
    /// cipher.  Infallible.
    pub fn decrypt(&self, data: &[u8]) -> Vec<u8> {
        match *self {
            // XOR with a fixed key is its own inverse.
            Self::StreamXor { .. } => self.encrypt(data),
            Self::Shift { shift } => {
                let back = (ALPHABET_LEN - shift) % ALPHABET_LEN;
                data.iter().map(|&b| rotate(b, back)).collect()
            }
        }
    }

    /// Human-readable cipher name for prompts and messages.
    pub fn name(&self) -> &'static str {
        match self {
            Self::StreamXor { .. } => "stream-xor",
            Self::Shift { .. } => "shift",
        }
    }
}

/// Rotate one byte forward by `amount` within its case's alphabet.
/// Non-alphabetic bytes are returned unchanged.
fn rotate(byte: u8, amount: u8) -> u8 {
    match byte {
        b'a'..=b'z' => b'a' + (byte - b'a' + amount) % ALPHABET_LEN,
        b'A'..=b'Z' => b'A' + (byte - b'A' + amount) % ALPHABET_LEN,
        _ => byte,
    }
}
