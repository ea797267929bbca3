//! End-to-end vault tests.
//!
//! These tests exercise the full open -> mutate -> persist -> reopen cycle
//! against a real temporary directory, the way the CLI drives the vault.

use passkeep_core::paths;
use passkeep_vault::{PasswordStore, VaultError};
use tempfile::TempDir;

fn open(home: &TempDir) -> PasswordStore {
    PasswordStore::open(&paths::key_file(home.path()), &paths::data_file(home.path())).unwrap()
}

#[test]
fn test_full_lifecycle_across_reopens() {
    let home = TempDir::new().unwrap();

    // First run: nothing on disk yet.
    let mut store = open(&home);
    assert!(store.list().is_empty());

    store.add("example.com", "bob", "s3cr3t").unwrap();
    store.add("github", "alice", "hunter2").unwrap();
    drop(store);

    // Second run: entries come back through decrypt + deserialize.
    let mut store = open(&home);
    assert_eq!(store.len(), 2);
    assert_eq!(store.get("example.com", "bob").unwrap().expose(), "s3cr3t");

    assert!(store.delete("example.com", "bob").unwrap());
    drop(store);

    // Third run: the deletion stuck.
    let store = open(&home);
    assert_eq!(store.len(), 1);
    assert!(store.get("example.com", "bob").is_none());
    assert_eq!(store.get("github", "alice").unwrap().expose(), "hunter2");
}

#[test]
fn test_reopen_with_replaced_key_fails() {
    let home = TempDir::new().unwrap();
    let key_path = paths::key_file(home.path());
    let data_path = paths::data_file(home.path());

    let mut store = PasswordStore::open(&key_path, &data_path).unwrap();
    store.add("example.com", "bob", "s3cr3t").unwrap();
    drop(store);

    std::fs::write(&key_path, b"a different key entirely").unwrap();

    let result = PasswordStore::open(&key_path, &data_path);
    assert!(matches!(result, Err(VaultError::DecryptionFailed(_))));
}

#[test]
fn test_on_disk_blob_is_opaque() {
    let home = TempDir::new().unwrap();

    let mut store = open(&home);
    store.add("example.com", "bob", "super-secret-value").unwrap();
    drop(store);

    let blob = std::fs::read(paths::data_file(home.path())).unwrap();
    let haystack = String::from_utf8_lossy(&blob);
    assert!(!haystack.contains("super-secret-value"));
    assert!(!haystack.contains("example.com"));
}
