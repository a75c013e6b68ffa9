//! Test fixtures and constants.

/// Default secrets file name.
pub const SECRETS_FILE: &str = "secrets.env";

/// Typical dotenv-style secrets file.
pub const SAMPLE_SECRETS: &str = "DATABASE_URL=postgres://localhost/mydb\nAPI_KEY=sk-test-12345\n";

/// Key material that decodes to a 16-byte key (AES-128 size).
pub const SHORT_KEY: &str = "AAAAAAAAAAAAAAAAAAAAAA==";

/// Valid 12-byte nonce.
pub const NONCE_12: &str = "AAAAAAAAAAAAAAAA";

/// Valid 32-byte key.
pub const KEY_32: &str = "AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA=";
