//! Run command.
//!
//! Executes a command with secret files materialized for its duration.
//! The command sees one environment variable holding the joined file
//! paths; the files are removed as soon as the command exits.

use tracing::debug;

use crate::cli::output;
use crate::core::config::Config;
use crate::core::session::{Session, SessionOptions};
use crate::core::source;
use crate::error::Result;

/// Run a command inside a scoped secret session.
pub fn execute(secrets: &[String], command: &[String]) -> Result<()> {
    let config = Config::load()?;

    let names: Vec<String> = if secrets.is_empty() {
        config.secrets.names.clone()
    } else {
        secrets.to_vec()
    };

    let source = source::from_config(&config.source)?;
    let session = Session::new(source.as_ref(), SessionOptions::from_config(&config));

    let outcome = session.run(&names, |binding| {
        debug!(command = %command[0], files = binding.paths().len(), "spawning command");

        let mut cmd = std::process::Command::new(&command[0]);
        cmd.args(&command[1..]);
        cmd.env(binding.variable(), binding.joined());
        cmd.status()
    })?;

    for warning in &outcome.warnings {
        output::warn(&warning.to_string());
    }

    // Spawn failures surface only after teardown has run
    let status = outcome.value?;

    // If the exit code is unavailable (terminated by signal), report failure
    std::process::exit(status.code().unwrap_or(1));
}
