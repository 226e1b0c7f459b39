//! Scoped secret sessions.
//!
//! The primary interface: bridge "secret material living in a source" to
//! "files an external process can read", for the shortest possible
//! window, with teardown on every exit path.

use std::path::PathBuf;

use tracing::{debug, warn};

use crate::core::artifact::EphemeralArtifact;
use crate::core::binding::SessionBinding;
use crate::core::config::Config;
use crate::core::constants;
use crate::core::source::{SecretName, SecretSource};
use crate::error::{ArtifactError, CleanupWarning, Result, SecretError};

/// Options controlling where artifacts live and how they are exposed.
#[derive(Debug, Clone)]
pub struct SessionOptions {
    /// Directory secret files are materialized in
    pub scratch_dir: PathBuf,
    /// Environment variable name for the joined binding value
    pub variable: String,
    /// Separator between paths in the joined value
    pub separator: String,
}

impl SessionOptions {
    /// Session options from a loaded configuration.
    pub fn from_config(config: &Config) -> Self {
        Self {
            scratch_dir: config.scratch_dir(),
            variable: config.binding.variable.clone(),
            separator: config.binding.separator.clone(),
        }
    }
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            scratch_dir: constants::default_scratch_dir(),
            variable: constants::DEFAULT_BINDING_VARIABLE.to_string(),
            separator: constants::DEFAULT_SEPARATOR.to_string(),
        }
    }
}

/// The result of a completed session.
///
/// `value` is whatever the action returned, untouched. `warnings` lists
/// teardown deletions that failed; they are already logged but handed
/// back so a CLI can surface them to the user.
#[derive(Debug)]
pub struct SessionOutput<R> {
    pub value: R,
    pub warnings: Vec<CleanupWarning>,
}

/// A scoped secret session.
///
/// `run` fetches each requested secret, materializes it as an ephemeral
/// file, invokes the action with a [`SessionBinding`], and deletes every
/// file before returning. Cleanup also runs when resolution, validation,
/// or materialization fails partway through a batch, and when the action
/// panics (the artifact files delete themselves on unwind).
///
/// The one gap: abrupt process termination (kill -9, power loss) while
/// the action is running can leave files behind in the scratch
/// directory. No exit path inside the process has that problem.
///
/// Sessions may run concurrently in one process; artifact filenames are
/// random, so sessions never share or reuse a path.
pub struct Session<'a> {
    source: &'a dyn SecretSource,
    options: SessionOptions,
}

impl<'a> Session<'a> {
    pub fn new(source: &'a dyn SecretSource, options: SessionOptions) -> Self {
        Self { source, options }
    }

    /// Fetch, materialize, run the action, tear down.
    ///
    /// Names are resolved sequentially in input order, so the binding's
    /// path order is reproducible. Duplicate names are resolved
    /// independently and get independent files.
    ///
    /// The action's return value passes through unmodified in
    /// `SessionOutput::value`; if the action's work can fail, return a
    /// `Result` from it and inspect it after `run` comes back.
    ///
    /// # Errors
    ///
    /// - `SecretError::NoneRequested` if `names` is empty
    /// - `SourceError::Unresolved` if a name cannot be resolved; the
    ///   action is never invoked and earlier artifacts are deleted first
    /// - `SecretError::Empty` if a payload is empty or whitespace-only,
    ///   under the same all-or-nothing rule
    /// - `ArtifactError` if the scratch directory or a secret file
    ///   cannot be written
    pub fn run<R, F>(&self, names: &[SecretName], action: F) -> Result<SessionOutput<R>>
    where
        F: FnOnce(&SessionBinding) -> R,
    {
        if names.is_empty() {
            return Err(SecretError::NoneRequested.into());
        }

        std::fs::create_dir_all(&self.options.scratch_dir).map_err(|source| {
            ArtifactError::Scratch {
                path: self.options.scratch_dir.clone(),
                source,
            }
        })?;

        let mut artifacts: Vec<EphemeralArtifact> = Vec::with_capacity(names.len());
        for name in names {
            let record = match self.source.fetch(name) {
                Ok(record) => record,
                Err(e) => {
                    discard(artifacts);
                    return Err(e.into());
                }
            };

            if record.payload().trim().is_empty() {
                discard(artifacts);
                return Err(SecretError::Empty(name.clone()).into());
            }

            let artifact = match EphemeralArtifact::materialize(
                &self.options.scratch_dir,
                name,
                record.payload().as_bytes(),
            ) {
                Ok(artifact) => artifact,
                Err(e) => {
                    discard(artifacts);
                    return Err(e.into());
                }
            };
            artifacts.push(artifact);
        }

        debug!(count = artifacts.len(), "secrets materialized");

        let binding = SessionBinding::new(
            &self.options.variable,
            &self.options.separator,
            artifacts.iter().map(|a| a.path().to_path_buf()).collect(),
        );

        let value = action(&binding);

        let warnings = sweep(artifacts);
        Ok(SessionOutput { value, warnings })
    }
}

/// Attempt every deletion, collecting failures.
///
/// A failed deletion never stops the sweep.
fn sweep(artifacts: Vec<EphemeralArtifact>) -> Vec<CleanupWarning> {
    let mut warnings = Vec::new();
    for artifact in artifacts {
        if let Err(w) = artifact.remove() {
            warn!(path = %w.path.display(), error = %w.error, "secret file survived teardown");
            warnings.push(w);
        }
    }
    warnings
}

/// Sweep on an error path, where warnings are logged but not returned.
fn discard(artifacts: Vec<EphemeralArtifact>) {
    let _ = sweep(artifacts);
}
