//! The encrypted password store.
//!
//! [`PasswordStore`] owns the master key and the decrypted entry map for
//! the process lifetime. All mutation flows through it: every mutating call
//! re-serializes the full snapshot, seals it, and atomically replaces the
//! data file before returning. Reads are served from memory.
//!
//! Single-process use only: there is no cross-process locking, and
//! concurrent writers would clobber each other's snapshots wholesale.

use std::fs;
use std::path::{Path, PathBuf};

use passkeep_core::SecretString;
use tracing::debug;
use zeroize::Zeroize;

use crate::crypto;
use crate::error::{Result, VaultError};
use crate::keyfile;
use crate::types::{Entry, EntryMap, Snapshot, FORMAT_VERSION};

/// Encrypted (service, username, secret) store backed by a single data
/// file.
pub struct PasswordStore {
    master_key: Vec<u8>,
    entries: EntryMap,
    data_path: PathBuf,
}

impl PasswordStore {
    /// Open the store, loading the master key and decrypting the data file.
    ///
    /// A missing data file is the first-run case and yields an empty store.
    /// A data file that exists but cannot be decrypted or parsed is an
    /// error - wrong key and tampering are not silently treated as "no
    /// data". Key-file I/O failure is fatal.
    pub fn open(key_path: &Path, data_path: &Path) -> Result<Self> {
        let master_key = keyfile::load_or_create(key_path)?;

        let entries = match fs::read(data_path) {
            Ok(blob) => decode_snapshot(&master_key, &blob)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %data_path.display(), "no data file, starting empty");
                EntryMap::new()
            }
            Err(e) => return Err(e.into()),
        };

        Ok(Self {
            master_key,
            entries,
            data_path: data_path.to_path_buf(),
        })
    }

    /// Store or overwrite the secret for `(service, username)`, then
    /// persist.
    ///
    /// No content validation is applied; empty strings are accepted for all
    /// three fields.
    pub fn add(&mut self, service: &str, username: &str, secret: &str) -> Result<()> {
        self.entries
            .entry(service.to_string())
            .or_default()
            .insert(username.to_string(), SecretString::new(secret));

        debug!(service, username, "stored entry");
        self.persist()
    }

    /// Look up the secret for `(service, username)`.
    ///
    /// Absence is `None`, never an error.
    pub fn get(&self, service: &str, username: &str) -> Option<SecretString> {
        self.entries
            .get(service)
            .and_then(|users| users.get(username))
            .cloned()
    }

    /// Remove the entry for `(service, username)`.
    ///
    /// Returns whether an entry was actually removed. Deleting a pair that
    /// does not exist is a no-op that leaves the data file untouched.
    pub fn delete(&mut self, service: &str, username: &str) -> Result<bool> {
        let Some(users) = self.entries.get_mut(service) else {
            return Ok(false);
        };
        if users.remove(username).is_none() {
            return Ok(false);
        }
        if users.is_empty() {
            self.entries.remove(service);
        }

        debug!(service, username, "deleted entry");
        self.persist()?;
        Ok(true)
    }

    /// All stored triples, materialized. No ordering is guaranteed.
    pub fn list(&self) -> Vec<Entry> {
        self.entries
            .iter()
            .flat_map(|(service, users)| {
                users.iter().map(|(username, secret)| Entry {
                    service: service.clone(),
                    username: username.clone(),
                    secret: secret.clone(),
                })
            })
            .collect()
    }

    /// Number of stored entries across all services.
    pub fn len(&self) -> usize {
        self.entries.values().map(|users| users.len()).sum()
    }

    /// Check whether the store holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Serialize the snapshot, seal it, and atomically replace the data
    /// file.
    ///
    /// Writes to a temporary sibling first, then renames over the target
    /// to avoid partial writes on crash. In-memory state is already mutated
    /// when this runs; a write failure leaves memory ahead of disk until
    /// the next successful persist.
    fn persist(&self) -> Result<()> {
        let snapshot = Snapshot::new(self.entries.clone());
        let plaintext = serde_json::to_vec(&snapshot)?;
        let blob = crypto::seal(&self.master_key, &plaintext)?;

        if let Some(parent) = self.data_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let tmp_path = self.data_path.with_extension("tmp");
        fs::write(&tmp_path, &blob)?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&tmp_path, fs::Permissions::from_mode(0o600))?;
        }

        fs::rename(&tmp_path, &self.data_path)?;

        debug!(path = %self.data_path.display(), entries = self.len(), "persisted snapshot");
        Ok(())
    }
}

impl Drop for PasswordStore {
    fn drop(&mut self) {
        self.master_key.zeroize();
    }
}

/// Decrypt and parse a data-file blob into the entry map.
fn decode_snapshot(master_key: &[u8], blob: &[u8]) -> Result<EntryMap> {
    let plaintext = crypto::open(master_key, blob)?;

    let snapshot: Snapshot = serde_json::from_slice(&plaintext)
        .map_err(|e| VaultError::Corrupt(format!("snapshot does not parse: {e}")))?;

    if snapshot.version > FORMAT_VERSION {
        return Err(VaultError::UnsupportedVersion {
            found: snapshot.version,
            supported: FORMAT_VERSION,
        });
    }

    Ok(snapshot.entries)
}
