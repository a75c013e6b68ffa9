//! Filesystem keyring.
//!
//! A TOML file mapping deployment ids to encoded key material:
//!
//! ```toml
//! [deployments.staging]
//! key = "..."
//! nonce = "..."
//! ```

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::KeyProvider;
use crate::core::file;
use crate::core::keys::{Deployment, KeyMaterial};
use crate::error::{ConfigError, Error, ProviderError, Result};

#[derive(Debug, Default, Serialize, Deserialize)]
struct KeyringFile {
    #[serde(default)]
    deployments: BTreeMap<String, KeyMaterial>,
}

/// Keyring stored at a fixed path.
#[derive(Debug, Clone)]
pub struct Keyring {
    path: PathBuf,
}

impl Keyring {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Store material for a deployment, creating the keyring if needed.
    ///
    /// # Errors
    ///
    /// Returns `ProviderError::AlreadyExists` when the deployment already has
    /// material and `force` is false.
    pub fn insert(&self, deployment: &Deployment, material: KeyMaterial, force: bool) -> Result<()> {
        let mut keyring = if self.path.exists() {
            self.load()?
        } else {
            KeyringFile::default()
        };

        if keyring.deployments.contains_key(deployment.as_str()) && !force {
            return Err(ProviderError::AlreadyExists(deployment.to_string()).into());
        }
        keyring
            .deployments
            .insert(deployment.as_str().to_string(), material);

        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            std::fs::create_dir_all(dir).map_err(|e| Error::io(dir, e))?;
        }
        let contents = toml::to_string_pretty(&keyring).map_err(ConfigError::Serialize)?;
        file::write(&self.path, contents.as_bytes())?;

        debug!(path = %self.path.display(), deployment = %deployment, "keyring updated");
        Ok(())
    }

    /// Look up raw entry without any further processing.
    pub(crate) fn entry(&self, deployment: &Deployment) -> Result<KeyMaterial> {
        let mut keyring = self.load()?;
        keyring
            .deployments
            .remove(deployment.as_str())
            .ok_or_else(|| ProviderError::UnknownDeployment(deployment.to_string()).into())
    }

    fn load(&self) -> Result<KeyringFile> {
        if !self.path.exists() {
            return Err(ProviderError::Unavailable(format!(
                "keyring not found at {}",
                self.path.display()
            ))
            .into());
        }

        #[cfg(unix)]
        warn_if_loose(&self.path);

        let contents = std::fs::read_to_string(&self.path)
            .map_err(|e| ProviderError::Unavailable(format!("{}: {}", self.path.display(), e)))?;
        toml::from_str(&contents).map_err(|e| {
            ProviderError::Malformed(format!("{}: {}", self.path.display(), e)).into()
        })
    }
}

impl KeyProvider for Keyring {
    fn fetch(&self, deployment: &Deployment) -> Result<KeyMaterial> {
        debug!(path = %self.path.display(), deployment = %deployment, "fetching from keyring");
        self.entry(deployment)
    }

    fn name(&self) -> &'static str {
        "keyring"
    }
}

/// Warn when the keyring is readable by anyone but the owner.
#[cfg(unix)]
fn warn_if_loose(path: &Path) {
    use std::os::unix::fs::PermissionsExt;

    if let Ok(metadata) = std::fs::metadata(path) {
        let mode = metadata.permissions().mode() & 0o777;
        if mode & 0o077 != 0 {
            warn!(
                path = %path.display(),
                mode = %format!("{:o}", mode),
                "keyring is accessible by other users, run: chmod 600"
            );
        }
    }
}
