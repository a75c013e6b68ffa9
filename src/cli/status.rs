//! Status command.

use crate::cli::{output, Context};
use crate::error::Result;

/// Report whether the secrets file is encrypted.
pub fn execute(ctx: &Context, json: bool) -> Result<()> {
    let secrets = ctx.secrets()?;
    let state = secrets.status()?;

    if json {
        let value = serde_json::json!({
            "file": ctx.file_display(),
            "deployment": secrets.deployment().as_str(),
            "state": state.as_str(),
        });
        output::data(&value.to_string());
    } else {
        output::kv("file", ctx.file_display());
        output::kv("deployment", secrets.deployment());
        output::kv("state", state);
    }
    Ok(())
}
