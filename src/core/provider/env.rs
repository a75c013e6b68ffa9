//! Key material from environment variables.

use tracing::debug;

use super::KeyProvider;
use crate::core::constants;
use crate::core::keys::{Deployment, KeyMaterial};
use crate::error::{ProviderError, Result};

/// Reads `DEPSEAL_KEY` and `DEPSEAL_NONCE`.
///
/// The variables hold material for whichever deployment the environment was
/// provisioned for, so the requested deployment is only logged.
#[derive(Debug, Clone)]
pub struct EnvProvider {
    key_var: String,
    nonce_var: String,
}

impl EnvProvider {
    pub fn new(key_var: impl Into<String>, nonce_var: impl Into<String>) -> Self {
        Self {
            key_var: key_var.into(),
            nonce_var: nonce_var.into(),
        }
    }
}

impl Default for EnvProvider {
    fn default() -> Self {
        Self::new(constants::ENV_KEY, constants::ENV_NONCE)
    }
}

impl KeyProvider for EnvProvider {
    fn fetch(&self, deployment: &Deployment) -> Result<KeyMaterial> {
        debug!(deployment = %deployment, key_var = %self.key_var, "reading key material from env");
        let key = read_var(&self.key_var)?;
        let nonce = read_var(&self.nonce_var)?;
        Ok(KeyMaterial::new(key, nonce))
    }

    fn name(&self) -> &'static str {
        "env"
    }
}

fn read_var(name: &str) -> Result<String> {
    std::env::var(name)
        .ok()
        .filter(|v| !v.is_empty())
        .ok_or_else(|| ProviderError::Unavailable(format!("{} is not set", name)).into())
}
