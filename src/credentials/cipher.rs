//! Passphrase-sealed credential blobs
//!
//! A blob is the standard base64 encoding of `nonce || ciphertext`, sealed
//! with AES-256-GCM. The key is the 32 ASCII characters of the lowercase hex
//! MD5 digest of the passphrase.

use aes_gcm::{
    aead::{Aead, KeyInit, OsRng},
    AeadCore, Aes256Gcm, Nonce,
};
use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use md5::{Digest, Md5};

use crate::error::CredentialError;

const NONCE_LEN: usize = 12;
const TAG_LEN: usize = 16;

fn cipher_for(passphrase: &str) -> Result<Aes256Gcm, CredentialError> {
    if passphrase.is_empty() {
        return Err(CredentialError::Decrypt("Passphrase is empty".to_string()));
    }

    let key = hex::encode(Md5::digest(passphrase.as_bytes()));
    Aes256Gcm::new_from_slice(key.as_bytes())
        .map_err(|e| CredentialError::Decrypt(format!("Invalid key: {}", e)))
}

/// Decrypt a credential blob
pub fn decrypt(ciphertext: &str, passphrase: &str) -> Result<String, CredentialError> {
    let ciphertext = ciphertext.trim();
    if ciphertext.is_empty() {
        return Err(CredentialError::Decrypt("Ciphertext is empty".to_string()));
    }

    let cipher = cipher_for(passphrase)?;

    let combined = BASE64
        .decode(ciphertext)
        .map_err(|e| CredentialError::Decrypt(format!("Invalid base64: {}", e)))?;

    if combined.len() < NONCE_LEN + TAG_LEN {
        return Err(CredentialError::Decrypt("Ciphertext too short".to_string()));
    }

    let (nonce_bytes, encrypted) = combined.split_at(NONCE_LEN);
    let plaintext = cipher
        .decrypt(Nonce::from_slice(nonce_bytes), encrypted)
        .map_err(|_| CredentialError::Decrypt("Wrong passphrase or corrupted ciphertext".to_string()))?;

    String::from_utf8(plaintext)
        .map_err(|e| CredentialError::Decrypt(format!("Invalid UTF-8: {}", e)))
}

/// Seal plaintext into a blob that `decrypt` accepts
pub fn seal(plaintext: &str, passphrase: &str) -> Result<String, CredentialError> {
    let cipher = cipher_for(passphrase)?;
    let nonce = Aes256Gcm::generate_nonce(&mut OsRng);

    let encrypted = cipher
        .encrypt(&nonce, plaintext.as_bytes())
        .map_err(|e| CredentialError::Decrypt(format!("Encryption failed: {}", e)))?;

    let mut combined = Vec::with_capacity(NONCE_LEN + encrypted.len());
    combined.extend_from_slice(&nonce);
    combined.extend_from_slice(&encrypted);

    Ok(BASE64.encode(combined))
}
