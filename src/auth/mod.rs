//! Master-password gate in front of the vault.
//!
//! The master secret comes from `.passvault.toml` (or its default) and
//! is compared directly against the candidate the user types — no
//! hashing, no lockout, no retries.  One failed attempt ends the
//! session.  The comparison itself goes through `subtle` so it runs in
//! constant time, but the scheme is otherwise as weak as it looks; the
//! gate only decides whether a `VaultStore` is ever constructed.

use subtle::ConstantTimeEq;
use zeroize::Zeroizing;

/// Holds the fixed master secret for one session.
pub struct AuthGate {
    master: Zeroizing<String>,
}

impl AuthGate {
    /// Build a gate around the configured master secret.
    pub fn new(master: &str) -> Self {
        Self {
            master: Zeroizing::new(master.to_string()),
        }
    }

    /// Compare a candidate against the master secret.
    ///
    /// Plain equality semantics: same bytes, same length.
    pub fn authenticate(&self, candidate: &str) -> bool {
        self.master
            .as_bytes()
            .ct_eq(candidate.as_bytes())
            .into()
    }
}
