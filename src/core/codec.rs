//! Text-safe encoding for key material and ciphertext.
//!
//! Standard base64 alphabet with required padding. Line breaks are ignored
//! on decode so files that picked up a trailing newline still round-trip.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::error::{CipherError, Result};

/// Encode raw bytes as padded standard base64.
pub fn encode(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}

/// Decode padded standard base64 into raw bytes.
///
/// # Errors
///
/// Returns `CipherError::Format` if the text contains characters or padding
/// outside the standard alphabet.
pub fn decode(text: &str) -> Result<Vec<u8>> {
    let compact = strip_line_breaks(text);
    STANDARD
        .decode(compact.as_bytes())
        .map_err(|e| CipherError::Format(e.to_string()).into())
}

/// Remove `\r` and `\n` anywhere in the input.
pub(crate) fn strip_line_breaks(text: &str) -> String {
    text.chars().filter(|c| !matches!(c, '\r' | '\n')).collect()
}
