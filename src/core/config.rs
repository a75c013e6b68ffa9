//! Configuration file management.
//!
//! Reads the optional `.depseal.toml` and merges it with command-line and
//! environment overrides. Precedence: flag or env var, then config file,
//! then built-in defaults.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::core::constants;
use crate::core::keys::Deployment;
use crate::error::{ConfigError, Error, Result};

/// Contents of `.depseal.toml`.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub depseal: Meta,
    #[serde(default)]
    pub provider: ProviderConfig,
}

/// The `[depseal]` section.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct Meta {
    /// Path to the secrets file
    #[serde(default)]
    pub file: Option<PathBuf>,
    /// Deployment whose key material seals the file
    #[serde(default)]
    pub deployment: Option<String>,
    /// Editor command for `depseal edit`
    #[serde(default)]
    pub editor: Option<String>,
}

/// Which key provider to use.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProviderKind {
    #[default]
    Keyring,
    Command,
    Env,
    AwsKms,
}

impl ProviderKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Keyring => "keyring",
            Self::Command => "command",
            Self::Env => "env",
            Self::AwsKms => "aws-kms",
        }
    }
}

/// The `[provider]` section.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct ProviderConfig {
    #[serde(default)]
    pub kind: ProviderKind,
    /// Keyring file (`keyring` and `aws-kms`)
    #[serde(default)]
    pub path: Option<String>,
    /// Program and leading arguments (`command`); the deployment is appended
    #[serde(default)]
    pub command: Vec<String>,
}

impl ProviderConfig {
    /// Keyring path with `~/` expanded, defaulting to `~/.depseal/keyring.toml`.
    pub fn keyring_path(&self) -> Result<PathBuf> {
        match &self.path {
            Some(p) => expand_home(p),
            None => home_dir().map(|h| h.join(constants::KEYRING_FILE)),
        }
    }
}

/// Values supplied on the command line or through the environment.
#[derive(Debug, Default, Clone)]
pub struct Overrides {
    pub config: Option<PathBuf>,
    pub file: Option<PathBuf>,
    pub deployment: Option<String>,
    pub editor: Option<String>,
}

/// Fully merged settings for one invocation.
#[derive(Debug, Clone)]
pub struct Settings {
    pub file: PathBuf,
    deployment: Option<Deployment>,
    pub editor: Option<String>,
    pub provider: ProviderConfig,
}

impl Settings {
    /// Deployment id, required by every command that touches keys.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingField` when no deployment was given.
    pub fn deployment(&self) -> Result<&Deployment> {
        self.deployment
            .as_ref()
            .ok_or_else(|| ConfigError::MissingField("deployment").into())
    }
}

impl Config {
    /// Path to the configuration file in the current directory
    pub fn config_path() -> PathBuf {
        PathBuf::from(constants::CONFIG_FILE)
    }

    /// Load configuration.
    ///
    /// An explicit path must exist. The default `.depseal.toml` is optional
    /// and an empty configuration is returned when it is absent.
    ///
    /// # Errors
    ///
    /// Returns an I/O error for an unreadable file and `ConfigError::Parse`
    /// for malformed TOML.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let path = match explicit {
            Some(p) => p.to_path_buf(),
            None => {
                let default = Self::config_path();
                if !default.exists() {
                    debug!("no config file, using defaults");
                    return Ok(Self::default());
                }
                default
            }
        };

        debug!(path = %path.display(), "loading config");
        let contents = std::fs::read_to_string(&path).map_err(|e| Error::io(&path, e))?;
        Self::parse(&contents)
    }

    /// Parse configuration from a TOML string.
    pub fn parse(contents: &str) -> Result<Self> {
        let config: Self = toml::from_str(contents).map_err(ConfigError::Parse)?;
        Ok(config)
    }

    /// Merge with overrides into final settings.
    pub fn resolve(self, overrides: Overrides) -> Result<Settings> {
        let file = overrides
            .file
            .or(self.depseal.file)
            .unwrap_or_else(|| PathBuf::from(constants::DEFAULT_SECRETS_FILE));

        let deployment = overrides
            .deployment
            .or(self.depseal.deployment)
            .map(Deployment::new)
            .transpose()?;

        let editor = overrides.editor.or(self.depseal.editor);

        if self.provider.kind == ProviderKind::Command && self.provider.command.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "provider.command",
                reason: "command provider needs a program to run".to_string(),
            }
            .into());
        }

        debug!(
            file = %file.display(),
            deployment = ?deployment,
            provider = self.provider.kind.name(),
            "settings resolved"
        );

        Ok(Settings {
            file,
            deployment,
            editor,
            provider: self.provider,
        })
    }
}

fn home_dir() -> Result<PathBuf> {
    dirs::home_dir().ok_or_else(|| {
        ConfigError::InvalidValue {
            field: "provider.path",
            reason: "unable to determine home directory".to_string(),
        }
        .into()
    })
}

fn expand_home(path: &str) -> Result<PathBuf> {
    match path.strip_prefix("~/") {
        Some(rest) => Ok(home_dir()?.join(rest)),
        None => Ok(PathBuf::from(path)),
    }
}
