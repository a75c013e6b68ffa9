//! Secrets file lifecycle.
//!
//! Composes state detection, key retrieval and the cipher into the four
//! workflows. Each workflow reads the file once, fetches key material at most
//! once, and writes only after the whole transform has succeeded.

use std::path::PathBuf;

use tracing::debug;
use zeroize::Zeroizing;

use crate::core::cipher;
use crate::core::detect::{self, State};
use crate::core::editor::Editor;
use crate::core::file;
use crate::core::keys::{Deployment, KeyMaterial};
use crate::core::provider::KeyProvider;
use crate::error::{CipherError, Result, StateError};

/// A deployment's secrets file.
pub struct Secrets<'a> {
    path: PathBuf,
    deployment: Deployment,
    provider: &'a dyn KeyProvider,
}

impl<'a> Secrets<'a> {
    pub fn new(
        path: impl Into<PathBuf>,
        deployment: Deployment,
        provider: &'a dyn KeyProvider,
    ) -> Self {
        Self {
            path: path.into(),
            deployment,
            provider,
        }
    }

    pub fn deployment(&self) -> &Deployment {
        &self.deployment
    }

    /// Current state of the file. Does not fetch keys.
    pub fn status(&self) -> Result<State> {
        let content = file::read(&self.path)?;
        Ok(State::of(&content))
    }

    /// Encrypt a plaintext file in place.
    ///
    /// # Errors
    ///
    /// `StateError::EmptyContent` for an empty file and
    /// `StateError::AlreadyEncrypted` when the content already looks sealed.
    /// The file is left untouched on any error.
    pub fn encrypt(&self) -> Result<()> {
        let content = file::read(&self.path)?;
        if detect::is_blank(&content) {
            return Err(StateError::EmptyContent.into());
        }
        if detect::is_encoded(&content) {
            return Err(StateError::AlreadyEncrypted.into());
        }

        let material = self.fetch()?;
        let sealed = cipher::seal(&material, &content)?;
        file::write(&self.path, sealed.as_bytes())?;

        debug!(path = %self.path.display(), "encrypted");
        Ok(())
    }

    /// Decrypt an encrypted file in place.
    ///
    /// # Errors
    ///
    /// `StateError::NotEncrypted` when the content does not look sealed.
    /// The file is left untouched on any error.
    pub fn decrypt(&self) -> Result<()> {
        let content = file::read(&self.path)?;
        if !detect::is_encoded(&content) {
            return Err(StateError::NotEncrypted.into());
        }

        let material = self.fetch()?;
        let plaintext = Zeroizing::new(cipher::open(&material, as_text(&content)?)?);
        file::write(&self.path, &plaintext)?;

        debug!(path = %self.path.display(), "decrypted");
        Ok(())
    }

    /// Plaintext of the file, decrypting if needed. Never writes.
    pub fn view(&self) -> Result<Vec<u8>> {
        let content = file::read(&self.path)?;
        if !detect::is_encoded(&content) {
            debug!(path = %self.path.display(), "viewing plaintext as-is");
            return Ok(content);
        }

        let material = self.fetch()?;
        cipher::open(&material, as_text(&content)?)
    }

    /// Decrypt into memory, hand to `editor`, and seal the result.
    ///
    /// Key material is fetched before the file is read. The file is always
    /// rewritten sealed, even when the editor changed nothing or the file
    /// started as plaintext.
    pub fn edit(&self, editor: &dyn Editor) -> Result<()> {
        let material = self.fetch()?;

        let content = Zeroizing::new(file::read(&self.path)?);
        let buffer = Zeroizing::new(if detect::is_encoded(&content) {
            cipher::open(&material, as_text(&content)?)?
        } else {
            content.to_vec()
        });

        let edited = Zeroizing::new(editor.edit(&buffer)?);
        debug!(
            changed = edited != buffer,
            bytes = edited.len(),
            "editor returned"
        );

        let sealed = cipher::seal(&material, &edited)?;
        file::write(&self.path, sealed.as_bytes())?;

        debug!(path = %self.path.display(), "re-encrypted after edit");
        Ok(())
    }

    fn fetch(&self) -> Result<KeyMaterial> {
        debug!(
            provider = self.provider.name(),
            deployment = %self.deployment,
            "fetching key material"
        );
        self.provider.fetch(&self.deployment)
    }
}

fn as_text(content: &[u8]) -> Result<&str> {
    std::str::from_utf8(content).map_err(|e| CipherError::Format(e.to_string()).into())
}
