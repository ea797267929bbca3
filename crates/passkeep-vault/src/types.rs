//! Snapshot and entry types.

use std::collections::HashMap;

use passkeep_core::SecretString;
use serde::{Deserialize, Serialize};

/// Current snapshot format version.
pub const FORMAT_VERSION: u32 = 1;

/// Mapping of service name to username to secret.
///
/// Both levels are keyed uniquely; no ordering is imposed. Callers that
/// need a stable order sort explicitly.
pub type EntryMap = HashMap<String, HashMap<String, SecretString>>;

/// One stored (service, username, secret) triple.
///
/// The secret is a [`SecretString`], so deriving `Debug` here cannot leak
/// plaintext into logs.
#[derive(Debug, Clone)]
pub struct Entry {
    /// Service the credential belongs to.
    pub service: String,

    /// Username for that service.
    pub username: String,

    /// The stored secret.
    pub secret: SecretString,
}

/// The plaintext envelope that gets serialized and sealed into the data
/// file.
///
/// `version` is written inside the encrypted payload so a future format
/// change can be detected after decryption instead of guessed at.
#[derive(Debug, Serialize, Deserialize)]
pub struct Snapshot {
    pub version: u32,
    pub entries: EntryMap,
}

impl Snapshot {
    /// Wrap an entry map in a current-version envelope.
    pub fn new(entries: EntryMap) -> Self {
        Self {
            version: FORMAT_VERSION,
            entries,
        }
    }
}
