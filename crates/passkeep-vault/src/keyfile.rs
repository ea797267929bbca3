//! Master key file handling.
//!
//! The master key lives in a plain file alongside the data it protects.
//! On first run a random key is generated and written out; on every later
//! run the file contents are read back verbatim. Existing key files are
//! accepted whatever their length, since the cipher key is always derived
//! through HKDF rather than used raw.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::crypto;
use crate::error::Result;

/// Load the master key from `path`, generating and persisting a fresh one
/// if the file does not exist yet.
///
/// Key-file I/O failure is fatal to store initialization.
pub fn load_or_create(path: &Path) -> Result<Vec<u8>> {
    if path.exists() {
        debug!(path = %path.display(), "loading master key");
        return Ok(fs::read(path)?);
    }

    debug!(path = %path.display(), "generating new master key");
    let key = crypto::generate_master_key();

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, &key)?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(path, fs::Permissions::from_mode(0o600))?;
    }

    Ok(key)
}
