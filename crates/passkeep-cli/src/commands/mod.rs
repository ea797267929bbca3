//! Command implementations.
//!
//! Every data command runs the access gate before opening the store; the
//! store itself exposes no authentication primitive.

pub mod add;
pub mod delete;
pub mod get;
pub mod init;
pub mod list;

use std::path::{Path, PathBuf};

use anyhow::Context;
use passkeep_core::paths;
use passkeep_vault::{AccessGate, PasswordStore};

/// Resolve the PassKeep home directory from the `--home` flag, falling
/// back to the default location.
pub fn resolve_home(flag: Option<PathBuf>) -> anyhow::Result<PathBuf> {
    match flag {
        Some(dir) => Ok(dir),
        None => paths::base_dir().context("could not resolve the PassKeep home directory"),
    }
}

/// Prompt for the access passphrase and check it against the verifier.
fn unlock(home: &Path) -> anyhow::Result<()> {
    let verifier = paths::verifier_file(home);
    if !AccessGate::is_initialized(&verifier) {
        anyhow::bail!("PassKeep is not initialized - run 'passkeep init' first");
    }

    let passphrase =
        rpassword::prompt_password("Access passphrase: ").context("failed to read passphrase")?;
    if !AccessGate::verify(&verifier, &passphrase)? {
        anyhow::bail!("Incorrect passphrase. Access denied.");
    }

    Ok(())
}

/// Unlock the gate, then open the password store.
pub(crate) fn open_store(home: &Path) -> anyhow::Result<PasswordStore> {
    unlock(home)?;
    PasswordStore::open(&paths::key_file(home), &paths::data_file(home))
        .context("failed to open the password store")
}
