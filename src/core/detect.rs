//! Secrets file state detection.
//!
//! State is never stored alongside the file. A blob counts as encrypted when
//! it decodes as base64, which means plaintext that happens to be valid
//! base64 (`abcd`, `test`) is reported as encrypted.

use std::fmt;

use crate::core::codec;

/// Whether `content` looks like sealed ciphertext.
///
/// Returns false for empty content, non-UTF-8 bytes, and text that does not
/// decode.
pub fn is_encoded(content: &[u8]) -> bool {
    if is_blank(content) {
        return false;
    }
    let Ok(text) = std::str::from_utf8(content) else {
        return false;
    };
    codec::decode(text).is_ok()
}

/// True when the content is empty or holds nothing but line breaks.
pub fn is_blank(content: &[u8]) -> bool {
    content.iter().all(|b| matches!(b, b'\r' | b'\n'))
}

/// Inferred state of a secrets file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    Plaintext,
    Encrypted,
}

impl State {
    /// Classify a blob.
    pub fn of(content: &[u8]) -> Self {
        if is_encoded(content) {
            Self::Encrypted
        } else {
            Self::Plaintext
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Plaintext => "plaintext",
            Self::Encrypted => "encrypted",
        }
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
