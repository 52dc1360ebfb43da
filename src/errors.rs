use thiserror::Error;

/// All errors that can occur in PassVault.
#[derive(Debug, Error)]
pub enum PassVaultError {
    // --- Auth errors ---
    #[error("Authentication failed — master password does not match")]
    AuthenticationFailed,

    // --- Cipher errors ---
    #[error("Shift must be between 0 and 25 (got {0})")]
    InvalidShift(u8),

    #[error("Xor key must be a single ASCII character (got '{0}')")]
    InvalidXorKey(char),

    // --- Config errors ---
    #[error("Config file error: {0}")]
    ConfigError(String),

    // --- CLI errors ---
    #[error("Command failed: {0}")]
    CommandFailed(String),

    // --- IO errors ---
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for PassVault results.
pub type Result<T> = std::result::Result<T, PassVaultError>;
