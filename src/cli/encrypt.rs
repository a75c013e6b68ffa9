//! Encrypt command.

use tracing::info;

use crate::cli::{output, Context};
use crate::error::Result;

/// Seal the secrets file in place.
pub fn execute(ctx: &Context) -> Result<()> {
    let secrets = ctx.secrets()?;
    secrets.encrypt()?;
    info!(deployment = %secrets.deployment(), "secrets file sealed");
    output::success(&format!("encrypted {}", output::path(&ctx.file_display())));
    Ok(())
}
