//! Access gate integration tests.
//!
//! Mirrors the CLI's launch sequence: verify the passphrase against the
//! gate, then open the store.

use passkeep_core::paths;
use passkeep_vault::{AccessGate, PasswordStore};
use tempfile::TempDir;

#[test]
fn test_gate_then_store_workflow() {
    let home = TempDir::new().unwrap();
    let verifier = paths::verifier_file(home.path());

    // `passkeep init`
    AccessGate::initialize(&verifier, "open sesame").unwrap();

    // `passkeep add` happy path: gate passes, store opens.
    assert!(AccessGate::verify(&verifier, "open sesame").unwrap());
    let mut store =
        PasswordStore::open(&paths::key_file(home.path()), &paths::data_file(home.path()))
            .unwrap();
    store.add("example.com", "bob", "s3cr3t").unwrap();

    // A wrong passphrase is rejected before the store is ever touched.
    assert!(!AccessGate::verify(&verifier, "open barley").unwrap());
}

#[test]
fn test_gate_survives_reinitialization() {
    let home = TempDir::new().unwrap();
    let verifier = paths::verifier_file(home.path());

    AccessGate::initialize(&verifier, "first passphrase").unwrap();

    // `passkeep init --force`
    AccessGate::reset(&verifier).unwrap();
    AccessGate::initialize(&verifier, "second passphrase").unwrap();

    assert!(!AccessGate::verify(&verifier, "first passphrase").unwrap());
    assert!(AccessGate::verify(&verifier, "second passphrase").unwrap());
}

#[test]
fn test_verifier_file_reveals_no_passphrase_material() {
    let home = TempDir::new().unwrap();
    let verifier = paths::verifier_file(home.path());

    AccessGate::initialize(&verifier, "correct horse battery staple").unwrap();

    let contents = std::fs::read_to_string(&verifier).unwrap();
    assert!(!contents.contains("correct horse battery staple"));

    // The record is plain JSON with its KDF parameters in the open.
    let record: serde_json::Value = serde_json::from_str(&contents).unwrap();
    assert_eq!(record["kdf"], "argon2id");
    assert!(record["m_cost"].as_u64().unwrap() > 0);
}
