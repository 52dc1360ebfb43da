//! Vault module — encrypted site/password storage.
//!
//! This module provides:
//! - The delimited line codec for vault records (`codec`)
//! - High-level `VaultStore` for loading, mutating, and persisting a
//!   vault file (`store`)

pub mod codec;
pub mod store;

// Re-export the most commonly used items.
pub use store::VaultStore;
