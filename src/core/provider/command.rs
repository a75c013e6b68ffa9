//! External key-management client.
//!
//! Runs `<program> <args...> <deployment>` and expects a JSON object on
//! stdout:
//!
//! ```json
//! {"key": "<base64, 32 bytes>", "nonce": "<base64, 12 bytes>"}
//! ```

use std::process::{Command, Stdio};

use tracing::{debug, trace};

use super::KeyProvider;
use crate::core::keys::{Deployment, KeyMaterial};
use crate::error::{ConfigError, ProviderError, Result};

/// Provider backed by an external command.
#[derive(Debug, Clone)]
pub struct CommandProvider {
    program: String,
    args: Vec<String>,
}

impl CommandProvider {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    /// Build from a full argv, program first.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` for an empty argv.
    pub fn from_argv(argv: &[String]) -> Result<Self> {
        let (program, args) = argv.split_first().ok_or_else(|| ConfigError::InvalidValue {
            field: "provider.command",
            reason: "command provider needs a program to run".to_string(),
        })?;
        Ok(Self::new(program.clone(), args.to_vec()))
    }
}

impl KeyProvider for CommandProvider {
    fn fetch(&self, deployment: &Deployment) -> Result<KeyMaterial> {
        debug!(program = %self.program, deployment = %deployment, "running key command");

        let output = Command::new(&self.program)
            .args(&self.args)
            .arg(deployment.as_str())
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .map_err(|e| {
                ProviderError::Command(format!("failed to run '{}': {}", self.program, e))
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(ProviderError::Command(format!(
                "'{}' exited with {}: {}",
                self.program,
                output.status,
                stderr.trim()
            ))
            .into());
        }

        trace!(stdout_len = output.stdout.len(), "key command finished");

        serde_json::from_slice(&output.stdout).map_err(|e| {
            ProviderError::Command(format!("'{}' printed invalid JSON: {}", self.program, e)).into()
        })
    }

    fn name(&self) -> &'static str {
        "command"
    }
}
