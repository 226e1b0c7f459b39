//! Session bindings.
//!
//! The binding is the only state a wrapped action sees: the ordered
//! artifact paths and the single joined value exported to the command.
//! Payloads are never part of it.

use std::path::PathBuf;

/// The data handed to a wrapped action.
#[derive(Debug, Clone)]
pub struct SessionBinding {
    variable: String,
    separator: String,
    paths: Vec<PathBuf>,
}

impl SessionBinding {
    pub(crate) fn new(variable: &str, separator: &str, paths: Vec<PathBuf>) -> Self {
        Self {
            variable: variable.to_string(),
            separator: separator.to_string(),
            paths,
        }
    }

    /// The environment variable name the joined value is exported under.
    pub fn variable(&self) -> &str {
        &self.variable
    }

    /// Artifact paths, in request order.
    pub fn paths(&self) -> &[PathBuf] {
        &self.paths
    }

    /// All paths joined with the configured separator.
    pub fn joined(&self) -> String {
        self.paths
            .iter()
            .map(|p| p.display().to_string())
            .collect::<Vec<_>>()
            .join(&self.separator)
    }
}
