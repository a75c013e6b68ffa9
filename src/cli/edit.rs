//! Edit command.
//!
//! Decrypts into a temp file, opens the editor, and re-encrypts whatever
//! comes back.

use crate::cli::{output, Context};
use crate::core::editor::SystemEditor;
use crate::error::Result;

/// Edit the secrets and re-seal them.
pub fn execute(ctx: &Context) -> Result<()> {
    let editor = SystemEditor::resolve(ctx.settings.editor.as_deref());
    ctx.secrets()?.edit(&editor)?;
    output::success(&format!("saved {} (encrypted)", output::path(&ctx.file_display())));
    Ok(())
}
