//! Decrypt command.

use crate::cli::{output, Context};
use crate::error::Result;

/// Open the secrets file in place.
pub fn execute(ctx: &Context) -> Result<()> {
    ctx.secrets()?.decrypt()?;
    output::success(&format!("decrypted {}", output::path(&ctx.file_display())));
    output::warn("plaintext on disk, run: depseal encrypt before committing");
    Ok(())
}
