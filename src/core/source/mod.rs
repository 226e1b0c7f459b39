//! Secret source backends.
//!
//! A source resolves opaque secret names to payloads. Sessions never care
//! where the payload came from, so backends stay small and stateless.
//!
//! ## Adding a New Source Backend
//!
//! 1. Implement the `SecretSource` trait
//! 2. Add the implementation in a new file (e.g., `vault.rs`)
//! 3. Wire it into `from_config`
//!
//! ## Example
//!
//! ```ignore
//! struct Vault { /* ... */ }
//!
//! impl SecretSource for Vault {
//!     fn fetch(&self, name: &str) -> Result<SecretRecord, SourceError> {
//!         // Resolve against the vault API
//!     }
//!     fn contains(&self, name: &str) -> bool {
//!         // Probe without reading the payload
//!     }
//! }
//! ```

use zeroize::Zeroizing;

use crate::core::config::{SourceConfig, SourceKind};
use crate::error::{ConfigError, Result, SourceError};

mod cmd;
mod dir;
mod env;

pub use cmd::CmdSource;
pub use dir::DirSource;
pub use env::EnvSource;

/// An opaque secret identifier.
///
/// The core imposes no structure beyond "the source must resolve it".
pub type SecretName = String;

/// A resolved secret payload.
///
/// The payload is zeroized when the record is dropped, and the `Debug`
/// representation never prints it.
pub struct SecretRecord {
    payload: Zeroizing<String>,
}

impl SecretRecord {
    /// Wrap a plaintext payload.
    pub fn new(payload: String) -> Self {
        Self {
            payload: Zeroizing::new(payload),
        }
    }

    /// The plaintext payload.
    pub fn payload(&self) -> &str {
        &self.payload
    }
}

impl std::fmt::Debug for SecretRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SecretRecord")
            .field("payload", &"[redacted]")
            .finish()
    }
}

/// Secret resolution trait.
///
/// Abstracts secret lookup to support multiple backends (directory of
/// files, process environment, external fetch command, vault API, etc.).
pub trait SecretSource {
    /// Resolve one secret name to its payload.
    ///
    /// # Errors
    ///
    /// Returns `SourceError::Unresolved` if the name is unknown to this
    /// source, or `SourceError::Backend` for any other backend failure.
    fn fetch(&self, name: &str) -> std::result::Result<SecretRecord, SourceError>;

    /// Check whether a name resolves, without reading the payload.
    fn contains(&self, name: &str) -> bool;
}

/// Build the source backend described by the configuration.
///
/// # Errors
///
/// Returns `SourceError::MissingCommand` if the cmd backend's fetch
/// command cannot be found on this system.
pub fn from_config(config: &SourceConfig) -> Result<Box<dyn SecretSource>> {
    match config.kind {
        SourceKind::Dir => {
            let path = config.path.clone().ok_or(ConfigError::MissingField {
                field: "source.path",
            })?;
            Ok(Box::new(DirSource::new(path)))
        }
        SourceKind::Env => Ok(Box::new(EnvSource::new(config.prefix.clone()))),
        SourceKind::Cmd => {
            let command = config.command.as_deref().ok_or(ConfigError::MissingField {
                field: "source.command",
            })?;
            Ok(Box::new(CmdSource::new(command)?))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_debug_redacts_payload() {
        let record = SecretRecord::new("hunter2".to_string());
        let rendered = format!("{:?}", record);
        assert!(!rendered.contains("hunter2"));
        assert!(rendered.contains("redacted"));
    }
}
