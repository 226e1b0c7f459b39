//! Ephemeral secret files.
//!
//! Each resolved secret is written to its own file in the scratch
//! directory under a collision-resistant random name, so concurrent
//! sessions in one process never step on each other.

use std::io::Write;
use std::path::Path;

use tempfile::{Builder, TempPath};
use tracing::trace;

use crate::core::constants;
use crate::error::{ArtifactError, CleanupWarning};

/// A secret file that exists only for the duration of a session.
///
/// The file is created with owner-only permissions on Unix. Dropping an
/// artifact deletes the file; the teardown sweep calls [`remove`] instead
/// so a failed deletion can be reported rather than swallowed.
///
/// [`remove`]: EphemeralArtifact::remove
pub struct EphemeralArtifact {
    name: String,
    path: TempPath,
}

impl EphemeralArtifact {
    /// Write a payload to a fresh file in the scratch directory.
    ///
    /// # Errors
    ///
    /// Returns `ArtifactError::Write` if the file cannot be created or
    /// the payload cannot be written.
    pub fn materialize(scratch: &Path, name: &str, payload: &[u8]) -> Result<Self, ArtifactError> {
        let write_err = |source| ArtifactError::Write {
            name: name.to_string(),
            source,
        };

        let mut file = Builder::new()
            .prefix(constants::ARTIFACT_PREFIX)
            .rand_bytes(constants::ARTIFACT_RAND_LEN)
            .tempfile_in(scratch)
            .map_err(write_err)?;

        file.write_all(payload).map_err(write_err)?;

        let path = file.into_temp_path();
        trace!(name, path = %path.display(), "materialized secret file");

        Ok(Self {
            name: name.to_string(),
            path,
        })
    }

    /// The secret name this artifact holds.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Absolute path of the secret file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Delete the file, reporting failure instead of ignoring it.
    pub fn remove(self) -> Result<(), CleanupWarning> {
        let path = self.path.to_path_buf();
        trace!(name = %self.name, path = %path.display(), "removing secret file");
        self.path.close().map_err(|error| CleanupWarning { path, error })
    }
}
