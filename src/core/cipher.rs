//! Authenticated encryption of the secrets blob.
//!
//! AES-256-GCM with no associated data. Output layout before encoding is
//! `ciphertext || tag` (16-byte tag). The nonce is supplied by the caller and
//! is not stored in the output, so sealing is deterministic for a given
//! (key, nonce, plaintext) and a (key, nonce) pair must never seal two
//! different plaintexts.

use aes_gcm::aead::{Aead, KeyInit};
use aes_gcm::{Aes256Gcm, Nonce};
use rand::rngs::OsRng;
use rand::RngCore;
use tracing::trace;
use zeroize::Zeroize;

use crate::core::codec;
use crate::core::keys::{KeyMaterial, KEY_LEN, NONCE_LEN};
use crate::error::{CipherError, Result};

/// Seal `plaintext` and return it base64-encoded.
///
/// # Errors
///
/// Returns `CipherError::KeyLength` unless `key` is 32 bytes and
/// `CipherError::NonceLength` unless `nonce` is 12 bytes.
pub fn seal_and_encode(key: &[u8], nonce: &[u8], plaintext: &[u8]) -> Result<String> {
    let aead = build(key, nonce)?;
    trace!(plaintext_len = plaintext.len(), "sealing");

    let sealed = aead
        .encrypt(Nonce::from_slice(nonce), plaintext)
        .map_err(|e| CipherError::EncryptionFailed(e.to_string()))?;

    trace!(sealed_len = sealed.len(), "sealed");
    Ok(codec::encode(&sealed))
}

/// Decode and open a blob produced by [`seal_and_encode`].
///
/// # Errors
///
/// Key and nonce sizes are checked first, then `CipherError::Format` on a
/// decode failure and `CipherError::Authentication` when the tag does not
/// verify. No plaintext is returned on failure.
pub fn decode_and_open(key: &[u8], nonce: &[u8], encoded: &str) -> Result<Vec<u8>> {
    let aead = build(key, nonce)?;
    let sealed = codec::decode(encoded)?;
    trace!(sealed_len = sealed.len(), "opening");

    let plaintext = aead
        .decrypt(Nonce::from_slice(nonce), sealed.as_slice())
        .map_err(|_| CipherError::Authentication)?;

    trace!(plaintext_len = plaintext.len(), "opened");
    Ok(plaintext)
}

/// Seal with encoded key material.
pub fn seal(material: &KeyMaterial, plaintext: &[u8]) -> Result<String> {
    let mut key = material.raw_key()?;
    let nonce = material.raw_nonce()?;
    let result = seal_and_encode(&key, &nonce, plaintext);
    key.zeroize();
    result
}

/// Open with encoded key material.
pub fn open(material: &KeyMaterial, encoded: &str) -> Result<Vec<u8>> {
    let mut key = material.raw_key()?;
    let nonce = material.raw_nonce()?;
    let result = decode_and_open(&key, &nonce, encoded);
    key.zeroize();
    result
}

/// Fresh random key and nonce from the OS CSPRNG.
pub fn generate() -> KeyMaterial {
    let mut key = [0u8; KEY_LEN];
    let mut nonce = [0u8; NONCE_LEN];
    OsRng.fill_bytes(&mut key);
    OsRng.fill_bytes(&mut nonce);

    let material = KeyMaterial::from_raw(&key, &nonce);
    key.zeroize();
    material
}

fn build(key: &[u8], nonce: &[u8]) -> Result<Aes256Gcm> {
    if key.len() != KEY_LEN {
        return Err(CipherError::KeyLength(key.len()).into());
    }
    if nonce.len() != NONCE_LEN {
        return Err(CipherError::NonceLength(nonce.len()).into());
    }
    Aes256Gcm::new_from_slice(key).map_err(|_| CipherError::KeyLength(key.len()).into())
}
