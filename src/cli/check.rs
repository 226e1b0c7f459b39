//! Check command.
//!
//! Resolves and validates every configured secret through a full
//! materialize-and-sweep cycle, so a green check means `run` will get
//! past setup. Nothing is left on disk.

use crate::cli::output;
use crate::core::config::Config;
use crate::core::session::{Session, SessionOptions};
use crate::core::source;
use crate::error::Result;

/// Check every configured secret.
pub fn execute() -> Result<()> {
    let config = Config::load()?;
    let names = &config.secrets.names;

    if names.is_empty() {
        output::dimmed("no secrets configured");
        return Ok(());
    }

    let source = source::from_config(&config.source)?;
    let session = Session::new(source.as_ref(), SessionOptions::from_config(&config));

    // One session per name, so a bad secret doesn't mask the rest
    let mut failures = 0;
    for name in names {
        match session.run(std::slice::from_ref(name), |_| ()) {
            Ok(outcome) => {
                for warning in &outcome.warnings {
                    output::warn(&warning.to_string());
                }
                output::success(name);
            }
            Err(e) => {
                failures += 1;
                output::error(&format!("{}: {}", name, e));
            }
        }
    }

    if failures > 0 {
        output::dimmed(&format!("{} of {} secrets failed", failures, names.len()));
        std::process::exit(1);
    }

    output::dimmed(&format!("{} secrets ok", names.len()));
    Ok(())
}
