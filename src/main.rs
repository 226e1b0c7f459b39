//! Satchel - scoped secret injection for commands.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use satchel::cli::output;
use satchel::cli::{execute, Cli};

fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber with env-filter support
    let filter = EnvFilter::try_from_env("SATCHEL_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("satchel=debug")
        } else {
            EnvFilter::new("satchel=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).without_time())
        .init();

    if let Err(e) = execute(cli.command) {
        // Format error with suggestion if available
        let error_msg = e.to_string();
        let suggestion = match &e {
            satchel::error::Error::Config(satchel::error::ConfigError::NotInitialized) => {
                Some("run: satchel init")
            }
            satchel::error::Error::Source(satchel::error::SourceError::MissingCommand(_)) => {
                Some("check [source].command in .satchel.toml")
            }
            _ => None,
        };

        output::error(&error_msg);
        if let Some(hint) = suggestion {
            output::hint(hint);
        }
        std::process::exit(1);
    }
}
