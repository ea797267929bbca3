//! AES-256-GCM encryption with HKDF-SHA256 key derivation.
//!
//! The master key is never used directly as a cipher key: every seal picks
//! a fresh random salt and derives the AES key with HKDF. The output blob
//! is self-contained (`salt || nonce || ciphertext`), so the data file
//! needs no sidecar metadata.

use aes_gcm::aead::Aead;
use aes_gcm::{Aes256Gcm, KeyInit, Nonce};
use hkdf::Hkdf;
use rand::RngCore;
use sha2::Sha256;

use crate::error::{Result, VaultError};

pub(crate) const SALT_SIZE: usize = 32;
pub(crate) const NONCE_SIZE: usize = 12;
const KEY_SIZE: usize = 32;

/// HKDF info string used to domain-separate derived keys.
const HKDF_INFO: &[u8] = b"passkeep-vault-v1";

/// Derive a 256-bit cipher key from `master_key` and `salt` via HKDF-SHA256.
///
/// The master key may have any length; HKDF extracts before expanding, so
/// arbitrary key-file contents are acceptable input keying material.
fn derive_key(master_key: &[u8], salt: &[u8]) -> [u8; KEY_SIZE] {
    let hk = Hkdf::<Sha256>::new(Some(salt), master_key);
    let mut okm = [0u8; KEY_SIZE];
    // expand cannot fail when output length <= 255 * hash-length
    hk.expand(HKDF_INFO, &mut okm)
        .expect("HKDF expand should not fail for 32-byte output");
    okm
}

/// Encrypt `plaintext` under a key derived from `master_key`.
///
/// Returns `salt || nonce || ciphertext_with_tag`. Salt and nonce are
/// randomly generated, so sealing the same plaintext twice produces
/// different blobs.
pub fn seal(master_key: &[u8], plaintext: &[u8]) -> Result<Vec<u8>> {
    let mut salt = [0u8; SALT_SIZE];
    rand::thread_rng().fill_bytes(&mut salt);

    let mut nonce_bytes = [0u8; NONCE_SIZE];
    rand::thread_rng().fill_bytes(&mut nonce_bytes);

    let key = derive_key(master_key, &salt);
    let cipher = Aes256Gcm::new_from_slice(&key)
        .map_err(|e| VaultError::EncryptionFailed(e.to_string()))?;

    let nonce = Nonce::from_slice(&nonce_bytes);
    let ciphertext = cipher
        .encrypt(nonce, plaintext)
        .map_err(|e| VaultError::EncryptionFailed(e.to_string()))?;

    let mut blob = Vec::with_capacity(SALT_SIZE + NONCE_SIZE + ciphertext.len());
    blob.extend_from_slice(&salt);
    blob.extend_from_slice(&nonce_bytes);
    blob.extend_from_slice(&ciphertext);

    Ok(blob)
}

/// Decrypt a blob previously produced by [`seal`].
///
/// Fails if the blob is truncated, was sealed under a different master key,
/// or was modified after sealing (GCM authentication covers the whole
/// ciphertext, so any flipped byte is detected).
pub fn open(master_key: &[u8], blob: &[u8]) -> Result<Vec<u8>> {
    if blob.len() < SALT_SIZE + NONCE_SIZE {
        return Err(VaultError::DecryptionFailed(
            "ciphertext too short".to_string(),
        ));
    }

    let (salt, rest) = blob.split_at(SALT_SIZE);
    let (nonce_bytes, ciphertext) = rest.split_at(NONCE_SIZE);

    let key = derive_key(master_key, salt);
    let cipher = Aes256Gcm::new_from_slice(&key)
        .map_err(|e| VaultError::DecryptionFailed(e.to_string()))?;

    let nonce = Nonce::from_slice(nonce_bytes);
    cipher
        .decrypt(nonce, ciphertext)
        .map_err(|e| VaultError::DecryptionFailed(e.to_string()))
}

/// Generate a new random 256-bit master key.
pub fn generate_master_key() -> Vec<u8> {
    let mut key = vec![0u8; KEY_SIZE];
    rand::thread_rng().fill_bytes(&mut key);
    key
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_seal_open() {
        let master_key = generate_master_key();
        let plaintext = b"hello, secret world!";

        let blob = seal(&master_key, plaintext).unwrap();
        let decrypted = open(&master_key, &blob).unwrap();

        assert_eq!(decrypted, plaintext);
    }

    #[test]
    fn test_wrong_key_fails() {
        let key_a = generate_master_key();
        let key_b = generate_master_key();

        let blob = seal(&key_a, b"sensitive data").unwrap();
        let result = open(&key_b, &blob);

        assert!(result.is_err(), "decryption with wrong key should fail");
    }

    #[test]
    fn test_tampered_blob_fails() {
        let master_key = generate_master_key();

        let mut blob = seal(&master_key, b"important secret").unwrap();

        // Flip a byte in the ciphertext portion (past salt and nonce).
        let idx = SALT_SIZE + NONCE_SIZE + 1;
        blob[idx] ^= 0xff;

        let result = open(&master_key, &blob);
        assert!(
            result.is_err(),
            "tampered ciphertext should fail authentication"
        );
    }

    #[test]
    fn test_truncated_blob_fails() {
        let master_key = generate_master_key();
        let result = open(&master_key, &[0u8; SALT_SIZE + NONCE_SIZE - 1]);
        assert!(matches!(result, Err(VaultError::DecryptionFailed(_))));
    }

    #[test]
    fn test_sealing_twice_differs() {
        let master_key = generate_master_key();

        let blob_a = seal(&master_key, b"same plaintext").unwrap();
        let blob_b = seal(&master_key, b"same plaintext").unwrap();

        assert_ne!(blob_a, blob_b);
    }

    #[test]
    fn test_arbitrary_length_master_key() {
        // Pre-existing key files are accepted whatever their contents.
        let master_key = b"not a proper 32-byte key";

        let blob = seal(master_key, b"payload").unwrap();
        let decrypted = open(master_key, &blob).unwrap();

        assert_eq!(decrypted, b"payload");
    }

    #[test]
    fn test_empty_plaintext_works() {
        let master_key = generate_master_key();

        let blob = seal(&master_key, b"").unwrap();
        let decrypted = open(&master_key, &blob).unwrap();

        assert!(decrypted.is_empty());
    }
}
