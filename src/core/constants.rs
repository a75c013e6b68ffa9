//! Constants used throughout depseal.
//!
//! Centralizes magic strings and configuration values.

/// Configuration file name (.depseal.toml).
pub const CONFIG_FILE: &str = ".depseal.toml";

/// Secrets file used when nothing else is configured.
pub const DEFAULT_SECRETS_FILE: &str = "secrets.env";

/// Keyring location relative to HOME (~/.depseal/keyring.toml).
pub const KEYRING_FILE: &str = ".depseal/keyring.toml";

/// Environment variable holding the base64 key for the `env` provider.
pub const ENV_KEY: &str = "DEPSEAL_KEY";

/// Environment variable holding the base64 nonce for the `env` provider.
pub const ENV_NONCE: &str = "DEPSEAL_NONCE";

/// Editor of last resort.
pub const DEFAULT_EDITOR: &str = "vi";

/// Suffix for the temp file handed to the editor.
pub const EDIT_SUFFIX: &str = ".env";
