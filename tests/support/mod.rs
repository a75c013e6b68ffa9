//! Test support utilities for depseal integration tests.
//!
//! Provides reusable test environment setup and helper commands.

#![allow(dead_code)]

pub mod fixtures;

#[allow(unused_imports)]
pub use assertions::*;
#[allow(unused_imports)]
pub use fixtures::*;

use std::path::PathBuf;

use tempfile::TempDir;

/// Test environment with isolated temp directories.
///
/// Each test gets its own temporary project dir and home dir. The keyring
/// lives under the temp home, so nothing touches the real `~/.depseal`.
pub struct Test {
    /// Temporary directory for the test project
    pub dir: TempDir,
    /// Temporary home directory
    pub home: TempDir,
}

impl Test {
    /// Create a new empty test environment.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");
        let home = TempDir::new().expect("failed to create temp home");

        Self { dir, home }
    }

    /// Create a test environment with a config naming `deployment` and
    /// fresh key material for it in the keyring.
    pub fn init(deployment: &str) -> Self {
        let t = Self::new();
        t.write_config(&format!("[depseal]\ndeployment = \"{}\"\n", deployment));
        let output = t.keygen_save();
        assert!(
            output.status.success(),
            "Failed to generate key material: {}",
            String::from_utf8_lossy(&output.stderr)
        );
        t
    }

    /// Initialized environment with a plaintext secrets file.
    pub fn with_secrets(deployment: &str, content: &str) -> Self {
        let t = Self::init(deployment);
        t.write_secrets(content.as_bytes());
        t
    }

    /// Write `.depseal.toml`.
    pub fn write_config(&self, contents: &str) {
        std::fs::write(self.dir.path().join(".depseal.toml"), contents)
            .expect("failed to write config");
    }

    /// Path to the default secrets file.
    pub fn secrets_path(&self) -> PathBuf {
        self.dir.path().join(SECRETS_FILE)
    }

    /// Path to the keyring under the temp home.
    pub fn keyring_path(&self) -> PathBuf {
        self.home.path().join(".depseal").join("keyring.toml")
    }

    pub fn write_secrets(&self, content: &[u8]) {
        std::fs::write(self.secrets_path(), content).expect("failed to write secrets file");
    }

    pub fn read_secrets(&self) -> Vec<u8> {
        std::fs::read(self.secrets_path()).expect("failed to read secrets file")
    }
}
