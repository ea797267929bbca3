//! Launch-time access gate.
//!
//! The store itself never authenticates anyone; callers run this check
//! before opening it. The passphrase is stretched with Argon2id and the
//! derived bytes are compared against a verifier written at init time.
//! KDF parameters travel with the verifier file, so they can be retuned
//! later without invalidating existing installs.

use std::fs;
use std::path::Path;

use argon2::{Algorithm, Argon2, Params, Version};
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use chrono::{DateTime, Utc};
use passkeep_core::constant_time_eq;
use rand::RngCore;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Result, VaultError};

const SALT_SIZE: usize = 16;
const VERIFIER_SIZE: usize = 32;

/// KDF identifier written into version-1 verifier files.
const KDF_NAME: &str = "argon2id";

/// Default Argon2id cost parameters for new verifier files.
const DEFAULT_M_COST: u32 = 19_456;
const DEFAULT_T_COST: u32 = 2;
const DEFAULT_P_COST: u32 = 1;

/// On-disk verifier record.
#[derive(Debug, Serialize, Deserialize)]
struct VerifierFile {
    /// Key derivation function (always "argon2id" for now).
    kdf: String,
    /// Argon2 memory cost in KiB.
    m_cost: u32,
    /// Argon2 time cost (iterations).
    t_cost: u32,
    /// Argon2 parallelism.
    p_cost: u32,
    /// KDF salt, hex-encoded.
    salt: String,
    /// Derived verifier bytes, base64-encoded.
    verifier: String,
    /// When the gate was initialized.
    created_at: DateTime<Utc>,
}

/// Password-derived access gate.
///
/// Replaces the notion of a hardcoded launch password with a real check: a
/// key derived from the passphrase must match the stored verifier.
pub struct AccessGate;

impl AccessGate {
    /// Check whether a verifier file exists at `path`.
    pub fn is_initialized(path: &Path) -> bool {
        path.exists()
    }

    /// Create the verifier file for `passphrase`.
    ///
    /// Refuses to overwrite an existing verifier; use [`AccessGate::reset`]
    /// first to replace a passphrase.
    pub fn initialize(path: &Path, passphrase: &str) -> Result<()> {
        if path.exists() {
            return Err(VaultError::AlreadyInitialized);
        }

        let mut salt = [0u8; SALT_SIZE];
        rand::thread_rng().fill_bytes(&mut salt);

        let verifier = derive(
            passphrase.as_bytes(),
            &salt,
            DEFAULT_M_COST,
            DEFAULT_T_COST,
            DEFAULT_P_COST,
        )?;

        let record = VerifierFile {
            kdf: KDF_NAME.to_string(),
            m_cost: DEFAULT_M_COST,
            t_cost: DEFAULT_T_COST,
            p_cost: DEFAULT_P_COST,
            salt: hex::encode(salt),
            verifier: BASE64.encode(verifier),
            created_at: Utc::now(),
        };

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, serde_json::to_string_pretty(&record)?)?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(path, fs::Permissions::from_mode(0o600))?;
        }

        debug!(path = %path.display(), "access gate initialized");
        Ok(())
    }

    /// Remove the verifier file if present.
    pub fn reset(path: &Path) -> Result<()> {
        match fs::remove_file(path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    /// Check `passphrase` against the stored verifier.
    ///
    /// A wrong passphrase is `Ok(false)`. A missing or malformed verifier
    /// file is an error - corruption must never grant access.
    pub fn verify(path: &Path, passphrase: &str) -> Result<bool> {
        let data = fs::read_to_string(path)?;
        let record: VerifierFile = serde_json::from_str(&data)
            .map_err(|e| VaultError::Verifier(format!("verifier file does not parse: {e}")))?;

        if record.kdf != KDF_NAME {
            return Err(VaultError::Verifier(format!(
                "unknown KDF '{}'",
                record.kdf
            )));
        }

        let salt = hex::decode(&record.salt)
            .map_err(|e| VaultError::Verifier(format!("salt is not valid hex: {e}")))?;
        let expected = BASE64
            .decode(&record.verifier)
            .map_err(|e| VaultError::Verifier(format!("verifier is not valid base64: {e}")))?;

        let derived = derive(
            passphrase.as_bytes(),
            &salt,
            record.m_cost,
            record.t_cost,
            record.p_cost,
        )?;

        Ok(constant_time_eq(&derived, &expected))
    }
}

/// Stretch `passphrase` into a fixed-size verifier with Argon2id.
fn derive(
    passphrase: &[u8],
    salt: &[u8],
    m_cost: u32,
    t_cost: u32,
    p_cost: u32,
) -> Result<[u8; VERIFIER_SIZE]> {
    let params = Params::new(m_cost, t_cost, p_cost, Some(VERIFIER_SIZE))
        .map_err(|e| VaultError::Kdf(format!("invalid Argon2 parameters: {e}")))?;
    let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, params);

    let mut out = [0u8; VERIFIER_SIZE];
    argon2
        .hash_password_into(passphrase, salt, &mut out)
        .map_err(|e| VaultError::Kdf(e.to_string()))?;
    Ok(out)
}
