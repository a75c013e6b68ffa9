//! Key providers.
//!
//! Resolve a deployment id to its key material. Connection, auth and retry
//! policy belong to whatever sits behind the provider; failures come back
//! as `ProviderError` and are never retried here.
//!
//! ## Providers
//!
//! - **keyring**: Default. TOML keyring file on disk.
//! - **command**: External key-management client printing JSON.
//! - **env**: `DEPSEAL_KEY` / `DEPSEAL_NONCE`, for CI.
//! - **aws-kms**: Feature-gated (`aws`). Keyring whose keys are wrapped by AWS KMS.

use crate::core::config::{ProviderConfig, ProviderKind};
use crate::core::keys::{Deployment, KeyMaterial};
use crate::error::{ProviderError, Result};

mod command;
mod env;
mod keyring;

#[cfg(feature = "aws")]
pub mod aws;

pub use command::CommandProvider;
pub use env::EnvProvider;
pub use keyring::Keyring;

/// Source of per-deployment key material.
pub trait KeyProvider {
    /// Fetch key material for `deployment`.
    ///
    /// # Errors
    ///
    /// Returns `ProviderError` when the material cannot be retrieved.
    fn fetch(&self, deployment: &Deployment) -> Result<KeyMaterial>;

    /// Provider name for logs and messages.
    fn name(&self) -> &'static str;
}

/// Fixed key material for a single deployment.
#[derive(Debug)]
pub struct StaticProvider {
    deployment: Deployment,
    material: KeyMaterial,
}

impl StaticProvider {
    pub fn new(deployment: Deployment, material: KeyMaterial) -> Self {
        Self {
            deployment,
            material,
        }
    }
}

impl KeyProvider for StaticProvider {
    fn fetch(&self, deployment: &Deployment) -> Result<KeyMaterial> {
        if deployment != &self.deployment {
            return Err(ProviderError::UnknownDeployment(deployment.to_string()).into());
        }
        Ok(self.material.clone())
    }

    fn name(&self) -> &'static str {
        "static"
    }
}

/// Build the provider described by the configuration.
pub fn from_config(config: &ProviderConfig) -> Result<Box<dyn KeyProvider>> {
    match config.kind {
        ProviderKind::Keyring => Ok(Box::new(Keyring::new(config.keyring_path()?))),
        ProviderKind::Command => Ok(Box::new(CommandProvider::from_argv(&config.command)?)),
        ProviderKind::Env => Ok(Box::new(EnvProvider::default())),
        #[cfg(feature = "aws")]
        ProviderKind::AwsKms => Ok(Box::new(aws::KmsKeyring::new(Keyring::new(
            config.keyring_path()?,
        )))),
        #[cfg(not(feature = "aws"))]
        ProviderKind::AwsKms => Err(crate::error::ConfigError::UnknownProvider(
            "aws-kms (rebuild with --features aws)".to_string(),
        )
        .into()),
    }
}
