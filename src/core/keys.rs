//! Key material and deployment identifiers.

use std::fmt;

use serde::{Deserialize, Serialize};
use zeroize::Zeroize;

use crate::core::codec;
use crate::error::{ConfigError, Result};

/// Expected AES-256 key size in bytes.
pub const KEY_LEN: usize = 32;

/// Expected AES-GCM nonce size in bytes.
pub const NONCE_LEN: usize = 12;

/// Base64-encoded key and nonce for one deployment.
///
/// Both values stay encoded until the cipher needs them and are wiped from
/// memory on drop.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyMaterial {
    key: String,
    nonce: String,
}

impl KeyMaterial {
    pub fn new(key: impl Into<String>, nonce: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            nonce: nonce.into(),
        }
    }

    /// Build material from raw bytes.
    pub fn from_raw(key: &[u8], nonce: &[u8]) -> Self {
        Self::new(codec::encode(key), codec::encode(nonce))
    }

    /// Encoded key.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Encoded nonce.
    pub fn nonce(&self) -> &str {
        &self.nonce
    }

    /// Decode the key. Length is checked by the cipher, not here.
    pub fn raw_key(&self) -> Result<Vec<u8>> {
        codec::decode(&self.key)
    }

    /// Decode the nonce. Length is checked by the cipher, not here.
    pub fn raw_nonce(&self) -> Result<Vec<u8>> {
        codec::decode(&self.nonce)
    }
}

impl fmt::Debug for KeyMaterial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyMaterial")
            .field("key", &"<redacted>")
            .field("nonce", &"<redacted>")
            .finish()
    }
}

impl Drop for KeyMaterial {
    fn drop(&mut self) {
        self.key.zeroize();
        self.nonce.zeroize();
    }
}

/// Opaque deployment identifier scoping which key material is fetched.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Deployment(String);

impl Deployment {
    /// Parse a deployment identifier.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` for empty or whitespace-only ids.
    pub fn new(id: impl Into<String>) -> Result<Self> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "deployment",
                reason: "must not be empty".to_string(),
            }
            .into());
        }
        Ok(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Deployment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
