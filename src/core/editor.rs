//! Interactive edit collaborator.
//!
//! The lifecycle only needs `bytes in, bytes out`. [`SystemEditor`] gets
//! there by writing the buffer to an owner-only temp file and running the
//! user's editor on it.

use std::io::Write;
use std::process::Command;

use tracing::debug;

use crate::core::constants;
use crate::error::{Error, Result};

/// Presents content for modification and returns the result.
pub trait Editor {
    fn edit(&self, initial: &[u8]) -> Result<Vec<u8>>;
}

impl<F> Editor for F
where
    F: Fn(&[u8]) -> Result<Vec<u8>>,
{
    fn edit(&self, initial: &[u8]) -> Result<Vec<u8>> {
        self(initial)
    }
}

/// Runs `$VISUAL` / `$EDITOR` on a temp file.
#[derive(Debug, Clone)]
pub struct SystemEditor {
    command: String,
}

impl SystemEditor {
    /// Use an explicit editor command, e.g. `code --wait`.
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
        }
    }

    /// Resolve the editor: explicit choice, then `$VISUAL`, `$EDITOR`, `vi`.
    pub fn resolve(explicit: Option<&str>) -> Self {
        let command = explicit
            .map(str::to_string)
            .or_else(|| non_empty_var("VISUAL"))
            .or_else(|| non_empty_var("EDITOR"))
            .unwrap_or_else(|| constants::DEFAULT_EDITOR.to_string());
        Self::new(command)
    }
}

impl Editor for SystemEditor {
    fn edit(&self, initial: &[u8]) -> Result<Vec<u8>> {
        let mut parts = self.command.split_whitespace();
        let program = parts
            .next()
            .ok_or_else(|| Error::Editor("no editor configured".to_string()))?;

        let mut tmp = tempfile::Builder::new()
            .prefix("depseal-")
            .suffix(constants::EDIT_SUFFIX)
            .tempfile()?;
        tmp.write_all(initial)?;
        tmp.flush()?;

        debug!(editor = %self.command, path = %tmp.path().display(), "launching editor");

        let status = Command::new(program)
            .args(parts)
            .arg(tmp.path())
            .status()
            .map_err(|e| Error::Editor(format!("failed to launch '{}': {}", program, e)))?;

        if !status.success() {
            return Err(Error::Editor(format!("'{}' exited with {}", program, status)));
        }

        // Re-read by path; some editors replace the file instead of writing in place.
        std::fs::read(tmp.path()).map_err(|e| Error::io(tmp.path(), e))
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}
