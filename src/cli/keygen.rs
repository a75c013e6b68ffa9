//! Keygen command.
//!
//! Produces fresh key material. Printing is the default; `--save` stores it
//! in the keyring under the configured deployment.

use crate::cli::{output, Context};
use crate::core::cipher;
use crate::core::config::ProviderKind;
use crate::core::provider::Keyring;
use crate::error::{ConfigError, Result};

/// Generate key material and print it. Needs no config or provider.
pub fn print(json: bool) -> Result<()> {
    let material = cipher::generate();

    if json {
        let value = serde_json::json!({
            "key": material.key(),
            "nonce": material.nonce(),
        });
        output::data(&value.to_string());
    } else {
        output::kv("key  ", material.key());
        output::kv("nonce", material.nonce());
    }
    Ok(())
}

/// Generate key material and store it in the keyring for the deployment.
pub fn save(ctx: &Context, force: bool) -> Result<()> {
    if ctx.settings.provider.kind != ProviderKind::Keyring {
        return Err(ConfigError::InvalidValue {
            field: "provider.kind",
            reason: format!(
                "--save only works with the keyring provider, not {}",
                ctx.settings.provider.kind.name()
            ),
        }
        .into());
    }

    let deployment = ctx.settings.deployment()?;
    let material = cipher::generate();
    let keyring = Keyring::new(ctx.settings.provider.keyring_path()?);
    keyring.insert(deployment, material, force)?;

    output::success(&format!(
        "stored key material for {} in {}",
        deployment,
        output::path(&keyring.path().display().to_string())
    ));
    Ok(())
}
