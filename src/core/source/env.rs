//! Environment source backend.
//!
//! Resolves secret names against the process environment. Names are
//! mapped to variable names by uppercasing, replacing `-` with `_`, and
//! prepending the configured prefix: with prefix `SECRET_`, the name
//! `app-env` reads `SECRET_APP_ENV`.

use tracing::trace;

use super::{SecretRecord, SecretSource};
use crate::error::SourceError;

/// Process environment as a secret source.
pub struct EnvSource {
    prefix: Option<String>,
}

impl EnvSource {
    pub fn new(prefix: Option<String>) -> Self {
        Self { prefix }
    }

    /// The environment variable a secret name maps to.
    fn variable_for(&self, name: &str) -> String {
        let mapped = name.to_ascii_uppercase().replace('-', "_");
        match &self.prefix {
            Some(prefix) => format!("{}{}", prefix, mapped),
            None => mapped,
        }
    }
}

impl SecretSource for EnvSource {
    fn fetch(&self, name: &str) -> Result<SecretRecord, SourceError> {
        let variable = self.variable_for(name);
        trace!(name, variable, "reading secret from environment");

        match std::env::var(&variable) {
            Ok(payload) => Ok(SecretRecord::new(payload)),
            Err(std::env::VarError::NotPresent) => {
                Err(SourceError::Unresolved(name.to_string()))
            }
            Err(std::env::VarError::NotUnicode(_)) => Err(SourceError::Backend {
                name: name.to_string(),
                reason: format!("{} is not valid unicode", variable),
            }),
        }
    }

    fn contains(&self, name: &str) -> bool {
        std::env::var_os(self.variable_for(name)).is_some()
    }
}
