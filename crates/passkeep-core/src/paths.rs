//! Path resolution utilities.
//!
//! All PassKeep state lives in a single home directory: the master key
//! file, the encrypted data file, and the access verifier. The default
//! location is `~/.passkeep`; callers that need a different root (the CLI's
//! `--home` flag, tests) pass an explicit base directory to the `*_file`
//! helpers instead.

use crate::error::ConfigError;
use std::path::{Path, PathBuf};

/// Get the default PassKeep home directory (~/.passkeep).
pub fn base_dir() -> Result<PathBuf, ConfigError> {
    let home = dirs::home_dir().ok_or_else(|| {
        ConfigError::Validation("Could not determine home directory".to_string())
    })?;
    Ok(home.join(".passkeep"))
}

/// Get the master key file path inside `base` (secret.key).
pub fn key_file(base: &Path) -> PathBuf {
    base.join("secret.key")
}

/// Get the encrypted data file path inside `base` (passwords.enc).
pub fn data_file(base: &Path) -> PathBuf {
    base.join("passwords.enc")
}

/// Get the access verifier file path inside `base` (access.json).
pub fn verifier_file(base: &Path) -> PathBuf {
    base.join("access.json")
}

/// Ensure `base` exists with owner-only permissions.
pub fn ensure_dir(base: &Path) -> Result<(), ConfigError> {
    std::fs::create_dir_all(base)?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(base, std::fs::Permissions::from_mode(0o700))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_dir() {
        let dir = base_dir().unwrap();
        assert!(dir.ends_with(".passkeep"));
    }

    #[test]
    fn test_file_paths_join_base() {
        let base = Path::new("/tmp/pk");
        assert_eq!(key_file(base), Path::new("/tmp/pk/secret.key"));
        assert_eq!(data_file(base), Path::new("/tmp/pk/passwords.enc"));
        assert_eq!(verifier_file(base), Path::new("/tmp/pk/access.json"));
    }

    #[cfg(unix)]
    #[test]
    fn test_ensure_dir_permissions() {
        use std::os::unix::fs::PermissionsExt;

        let tmp = tempfile::TempDir::new().unwrap();
        let base = tmp.path().join("home");
        ensure_dir(&base).unwrap();

        let mode = std::fs::metadata(&base).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode, 0o700);
    }
}
