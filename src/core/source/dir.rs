//! Directory source backend.
//!
//! Resolves secret names against a directory of plain files: the name is
//! the file basename, the payload is the file contents, verbatim.

use std::path::PathBuf;

use tracing::trace;

use super::{SecretRecord, SecretSource};
use crate::error::SourceError;

/// A directory of secret files.
pub struct DirSource {
    root: PathBuf,
}

impl DirSource {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Reject names that would escape the source directory.
    fn check_name(name: &str) -> Result<(), SourceError> {
        if name.contains('/') || name.contains('\\') || name == "." || name == ".." {
            return Err(SourceError::Backend {
                name: name.to_string(),
                reason: "name must be a plain filename".to_string(),
            });
        }
        Ok(())
    }
}

impl SecretSource for DirSource {
    fn fetch(&self, name: &str) -> Result<SecretRecord, SourceError> {
        Self::check_name(name)?;

        let path = self.root.join(name);
        trace!(name, path = %path.display(), "reading secret file");

        match std::fs::read_to_string(&path) {
            Ok(payload) => Ok(SecretRecord::new(payload)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(SourceError::Unresolved(name.to_string()))
            }
            Err(e) => Err(SourceError::Backend {
                name: name.to_string(),
                reason: e.to_string(),
            }),
        }
    }

    fn contains(&self, name: &str) -> bool {
        Self::check_name(name).is_ok() && self.root.join(name).is_file()
    }
}
