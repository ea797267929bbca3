//! Error types for the password vault.

use thiserror::Error;

/// Errors that can occur during vault operations.
///
/// Absence is not an error: a missing entry comes back as `None` from
/// `get` and `false` from `delete`.
#[derive(Debug, Error)]
pub enum VaultError {
    #[error("Encryption failed: {0}")]
    EncryptionFailed(String),

    #[error("Decryption failed: {0}")]
    DecryptionFailed(String),

    #[error("Data file is corrupt: {0}")]
    Corrupt(String),

    #[error("Unsupported data format version {found} (this build supports up to {supported})")]
    UnsupportedVersion { found: u32, supported: u32 },

    #[error("Access gate is already initialized")]
    AlreadyInitialized,

    #[error("Access verifier error: {0}")]
    Verifier(String),

    #[error("Key derivation failed: {0}")]
    Kdf(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience result alias for vault operations.
pub type Result<T> = std::result::Result<T, VaultError>;
