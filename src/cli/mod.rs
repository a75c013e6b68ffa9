//! Command-line interface.

pub mod completions;
pub mod context;
pub mod decrypt;
pub mod edit;
pub mod encrypt;
pub mod keygen;
pub mod output;
pub mod status;
pub mod view;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::core::config::Overrides;
use crate::error::Result;

pub use context::Context;

/// Depseal - envelope-encrypted secrets files for deployments.
#[derive(Parser)]
#[command(
    name = "depseal",
    about = "Envelope-encrypted secrets files for deployments",
    version,
    after_help = "Seal it before you ship it."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Secrets file to operate on
    #[arg(short, long, global = true, env = "DEPSEAL_FILE")]
    pub file: Option<PathBuf>,

    /// Deployment whose key material is used
    #[arg(short, long, global = true, env = "DEPSEAL_DEPLOYMENT")]
    pub deployment: Option<String>,

    /// Path to the config file (default: ./.depseal.toml)
    #[arg(long, global = true, env = "DEPSEAL_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

impl Cli {
    /// Command-line values that override the config file.
    pub fn overrides(&self) -> Overrides {
        Overrides {
            config: self.config.clone(),
            file: self.file.clone(),
            deployment: self.deployment.clone(),
            editor: match &self.command {
                Command::Edit { editor } => editor.clone(),
                _ => None,
            },
        }
    }
}

/// Top-level commands.
#[derive(Subcommand)]
pub enum Command {
    /// Encrypt the secrets file in place
    #[command(alias = "enc")]
    Encrypt,

    /// Decrypt the secrets file in place
    #[command(alias = "dec")]
    Decrypt,

    /// Print the decrypted secrets without modifying the file
    View,

    /// Edit the secrets in your editor and re-encrypt
    Edit {
        /// Editor command (default: $VISUAL, $EDITOR, vi)
        #[arg(long)]
        editor: Option<String>,
    },

    /// Show whether the secrets file is encrypted
    Status {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Generate fresh key material for a deployment
    Keygen {
        /// Store in the keyring for --deployment instead of printing
        #[arg(long)]
        save: bool,
        /// Overwrite existing key material when saving
        #[arg(long, requires = "save")]
        force: bool,
        /// Output as JSON
        #[arg(long, conflicts_with = "save")]
        json: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Execute a parsed command line.
pub fn execute(cli: Cli) -> Result<()> {
    use Command::*;

    let overrides = cli.overrides();
    let load = move || Context::load(overrides);

    match cli.command {
        Encrypt => encrypt::execute(&load()?),
        Decrypt => decrypt::execute(&load()?),
        View => view::execute(&load()?),
        Edit { .. } => edit::execute(&load()?),
        Status { json } => status::execute(&load()?, json),
        Keygen { save: true, force, .. } => keygen::save(&load()?, force),
        Keygen { json, .. } => keygen::print(json),
        Completions { shell } => completions::execute(shell),
    }
}
