//! Command source backend.
//!
//! Resolves secret names by running a configured fetch command with the
//! name as its only argument and capturing stdout. This is how an
//! external vault CLI plugs in without satchel knowing its API.
//!
//! ## Usage
//!
//! Configure with:
//! ```toml
//! [source]
//! kind = "cmd"
//! command = "vault-read"
//! ```
//!
//! `satchel run --secret app-env ...` then executes `vault-read app-env`
//! and uses its stdout, verbatim, as the payload.

use std::path::PathBuf;
use std::process::{Command, Stdio};

use tracing::trace;

use super::{SecretRecord, SecretSource};
use crate::error::SourceError;

/// An external fetch command as a secret source.
#[derive(Debug)]
pub struct CmdSource {
    program: PathBuf,
}

impl CmdSource {
    /// Resolve the fetch command on this system.
    ///
    /// # Errors
    ///
    /// Returns `SourceError::MissingCommand` if the binary is not on PATH.
    pub fn new(program: &str) -> Result<Self, SourceError> {
        let program = which::which(program)
            .map_err(|_| SourceError::MissingCommand(program.to_string()))?;
        Ok(Self { program })
    }
}

impl SecretSource for CmdSource {
    fn fetch(&self, name: &str) -> Result<SecretRecord, SourceError> {
        trace!(name, program = %self.program.display(), "running fetch command");

        let output = Command::new(&self.program)
            .arg(name)
            .stdin(Stdio::null())
            .output()
            .map_err(|e| SourceError::Backend {
                name: name.to_string(),
                reason: format!("failed to spawn {}: {}", self.program.display(), e),
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            trace!(name, stderr = %stderr.trim(), "fetch command failed");
            return Err(SourceError::Unresolved(name.to_string()));
        }

        let payload = String::from_utf8(output.stdout).map_err(|_| SourceError::Backend {
            name: name.to_string(),
            reason: "payload is not valid UTF-8".to_string(),
        })?;

        Ok(SecretRecord::new(payload))
    }

    fn contains(&self, name: &str) -> bool {
        self.fetch(name).is_ok()
    }
}
