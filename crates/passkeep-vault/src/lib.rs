//! Encrypted password storage for PassKeep.
//!
//! Provides AES-256-GCM encrypted snapshot persistence keyed by a
//! file-based master key, plus an Argon2id access gate for the launch-time
//! passphrase check.

pub mod access;
pub mod crypto;
pub mod error;
pub mod keyfile;
pub mod store;
pub mod types;

pub use access::AccessGate;
pub use error::{Result, VaultError};
pub use store::PasswordStore;
pub use types::{Entry, Snapshot, FORMAT_VERSION};
