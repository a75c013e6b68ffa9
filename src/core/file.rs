//! Secrets file I/O.
//!
//! Files are read and written whole. Writes go to a sibling temp file that is
//! renamed over the target, so a failed write leaves the old content in place.

use std::io::Write;
use std::path::Path;

use tracing::debug;

use crate::error::{Error, Result};

/// Read the whole file.
pub fn read(path: &Path) -> Result<Vec<u8>> {
    let content = std::fs::read(path).map_err(|e| Error::io(path, e))?;
    debug!(path = %path.display(), bytes = content.len(), "read secrets file");
    Ok(content)
}

/// Replace the file with `content`, owner read/write only.
pub fn write(path: &Path, content: &[u8]) -> Result<()> {
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };

    let mut tmp = tempfile::Builder::new()
        .prefix(".depseal-")
        .tempfile_in(dir)
        .map_err(|e| Error::io(dir, e))?;
    tmp.write_all(content).map_err(|e| Error::io(tmp.path(), e))?;
    tmp.as_file()
        .sync_all()
        .map_err(|e| Error::io(tmp.path(), e))?;

    // Restrict permissions on the secrets file (Unix only)
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(tmp.path(), std::fs::Permissions::from_mode(0o600))
            .map_err(|e| Error::io(tmp.path(), e))?;
    }

    tmp.persist(path).map_err(|e| Error::io(path, e.error))?;
    debug!(path = %path.display(), bytes = content.len(), "wrote secrets file");
    Ok(())
}
