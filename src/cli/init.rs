//! Init command - write a starter configuration.

use std::io::IsTerminal;

use tracing::info;

use crate::cli::output;
use crate::core::config::{self, Config, SourceConfig, SourceKind};
use crate::core::constants;
use crate::error::{ConfigError, Result};

/// Initialize satchel in the current directory.
///
/// Writes a `.satchel.toml` with the dir backend pointing at `.secrets/`
/// and makes sure that directory is gitignored.
pub fn execute(force: bool) -> Result<()> {
    if Config::exists() && !force {
        if !std::io::stdin().is_terminal() {
            return Err(ConfigError::AlreadyInitialized.into());
        }

        let overwrite = dialoguer::Confirm::new()
            .with_prompt(".satchel.toml exists. Overwrite?")
            .default(false)
            .interact()?;
        if !overwrite {
            output::dimmed("left existing config in place");
            return Ok(());
        }
    }

    let config = Config::new(SourceConfig {
        kind: SourceKind::Dir,
        path: Some(constants::DEFAULT_SECRET_DIR.into()),
        prefix: None,
        command: None,
    });
    config.save()?;
    config::ensure_gitignore()?;

    info!("initialized");

    output::success("initialized .satchel.toml");
    output::hint(&format!(
        "add secret files under {}/, then: satchel run -- <command>",
        constants::DEFAULT_SECRET_DIR
    ));

    Ok(())
}
