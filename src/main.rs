//! Depseal - envelope-encrypted secrets files for deployments.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use depseal::cli::output;
use depseal::cli::{execute, Cli};
use depseal::error::{Error, StateError};

fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber with env-filter support
    let filter = EnvFilter::try_from_env("DEPSEAL_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("depseal=debug")
        } else {
            EnvFilter::new("depseal=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    if let Err(e) = execute(cli) {
        // Format error with suggestion if available
        let suggestion = match &e {
            Error::State(StateError::AlreadyEncrypted) => {
                Some("run: depseal view or depseal edit")
            }
            Error::State(StateError::NotEncrypted) => Some("run: depseal encrypt"),
            Error::Config(depseal::error::ConfigError::MissingField("deployment")) => {
                Some("pass --deployment or set DEPSEAL_DEPLOYMENT")
            }
            Error::Provider(depseal::error::ProviderError::Unavailable(_)) => {
                Some("check the [provider] section of .depseal.toml")
            }
            _ => None,
        };

        output::error(&e.to_string());
        if let Some(hint) = suggestion {
            output::hint(hint);
        }
        std::process::exit(1);
    }
}
