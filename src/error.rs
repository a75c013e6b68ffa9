//! Error types.
//!
//! Every failure aborts the current operation. Nothing in the library
//! retries or recovers; the binary turns errors into an exit status.

use std::path::PathBuf;

use thiserror::Error;

/// Top-level error type.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Cipher(#[from] CipherError),

    #[error(transparent)]
    State(#[from] StateError),

    #[error(transparent)]
    Provider(#[from] ProviderError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("editor failed: {0}")]
    Editor(String),

    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("io error: {0}")]
    IoRaw(#[from] std::io::Error),
}

impl Error {
    /// Wrap an I/O error with the path it happened on.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Encoding and authenticated-encryption failures.
#[derive(Error, Debug)]
pub enum CipherError {
    #[error("invalid base64: {0}")]
    Format(String),

    #[error("invalid key length: expected 32 bytes, got {0}")]
    KeyLength(usize),

    #[error("invalid nonce length: expected 12 bytes, got {0}")]
    NonceLength(usize),

    #[error("authentication failed: ciphertext was tampered with or the key is wrong")]
    Authentication,

    #[error("encryption failed: {0}")]
    EncryptionFailed(String),
}

/// Precondition violations on the secrets file state.
#[derive(Error, Debug)]
pub enum StateError {
    #[error("secrets file is already encrypted")]
    AlreadyEncrypted,

    #[error("not touching unencrypted content")]
    NotEncrypted,

    #[error("secrets file is empty")]
    EmptyContent,
}

/// Key-management failures.
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("key provider unavailable: {0}")]
    Unavailable(String),

    #[error("no key material for deployment: {0}")]
    UnknownDeployment(String),

    #[error("malformed key material: {0}")]
    Malformed(String),

    #[error("key command failed: {0}")]
    Command(String),

    #[error("KMS error: {0}")]
    Kms(String),

    #[error("deployment already has key material: {0} (use --force to overwrite)")]
    AlreadyExists(String),
}

/// Configuration failures.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to serialize: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("missing required setting: {0}")]
    MissingField(&'static str),

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("unknown key provider: {0}")]
    UnknownProvider(String),
}

pub type Result<T> = std::result::Result<T, Error>;
