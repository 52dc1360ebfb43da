//! Cryptographic layer for PassVault.
//!
//! This module provides the pluggable symmetric cipher bound to a vault
//! session (`cipher`).  Both variants are deliberately simple, legacy
//! schemes — there is no key derivation, no nonce, and no
//! authentication tag, and the vault file carries no header saying
//! which cipher produced it.

pub mod cipher;

// Re-export the most commonly used items.
pub use cipher::{Cipher, CipherKind};
