//! Per-invocation context shared by the command handlers.

use crate::core::config::{Config, Overrides, Settings};
use crate::core::provider::{self, KeyProvider};
use crate::core::secrets::Secrets;
use crate::error::Result;

/// Merged settings plus the key provider they describe.
pub struct Context {
    pub settings: Settings,
    provider: Box<dyn KeyProvider>,
}

impl Context {
    /// Load config, apply overrides, and build the provider.
    pub fn load(overrides: Overrides) -> Result<Self> {
        let config = Config::load(overrides.config.as_deref())?;
        let settings = config.resolve(overrides)?;
        let provider = provider::from_config(&settings.provider)?;
        Ok(Self { settings, provider })
    }

    /// Secrets file handle for the configured deployment.
    pub fn secrets(&self) -> Result<Secrets<'_>> {
        let deployment = self.settings.deployment()?.clone();
        Ok(Secrets::new(
            self.settings.file.clone(),
            deployment,
            self.provider.as_ref(),
        ))
    }

    /// Display form of the secrets file path.
    pub fn file_display(&self) -> String {
        self.settings.file.display().to_string()
    }
}
