//! # passkeep-core
//!
//! Shared functionality used across the PassKeep crates:
//!
//! - **Paths**: resolution of the application home directory and the files
//!   that live inside it
//! - **Secrets**: [`SecretString`], a zero-on-drop string for credentials

pub mod error;
pub mod paths;
pub mod secret;

// Re-exports for convenience
pub use error::ConfigError;
pub use secret::{constant_time_eq, SecretString};
