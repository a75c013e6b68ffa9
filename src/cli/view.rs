//! View command - print plaintext without touching the file.

use zeroize::Zeroizing;

use crate::cli::{output, Context};
use crate::error::Result;

/// Write the decrypted secrets to stdout.
pub fn execute(ctx: &Context) -> Result<()> {
    // Wiped from memory once printed
    let plaintext = Zeroizing::new(ctx.secrets()?.view()?);
    output::raw(&plaintext)?;
    Ok(())
}
