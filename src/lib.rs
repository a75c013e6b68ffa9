//! Depseal - envelope-encrypted secrets files for deployments.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── encrypt       # Seal the secrets file in place
//! │   ├── decrypt       # Open the secrets file in place
//! │   ├── view          # Print plaintext without touching the file
//! │   ├── edit          # Decrypt, edit, re-seal
//! │   ├── status        # Report plaintext/encrypted
//! │   ├── keygen        # Generate key material
//! │   └── completions   # Shell completions
//! └── core/             # Core library components
//!     ├── codec         # base64 for keys and ciphertext
//!     ├── detect        # plaintext/encrypted heuristic
//!     ├── cipher        # AES-256-GCM seal/open
//!     ├── keys          # KeyMaterial, Deployment
//!     ├── provider/     # Key providers
//!     │   ├── mod       # KeyProvider trait
//!     │   ├── keyring   # TOML keyring file
//!     │   ├── command   # External key-management client
//!     │   ├── env       # Environment variables
//!     │   └── aws       # KMS-wrapped keyring (feature `aws`)
//!     ├── editor        # Edit collaborator
//!     ├── file          # Whole-file read, atomic owner-only write
//!     ├── config        # .depseal.toml management
//!     └── secrets       # Lifecycle orchestration
//! ```
//!
//! # Features
//!
//! - AES-256-GCM authenticated encryption
//! - Per-deployment key material from a pluggable provider
//! - Edits always end with the file sealed
//! - No partial writes: files are replaced atomically

pub mod cli;
pub mod core;
pub mod error;
