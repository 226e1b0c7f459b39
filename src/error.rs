//! Error types.
//!
//! Errors are grouped by the layer that produces them: configuration,
//! secret source, secret validation, and artifact materialization.
//! Cleanup failures are deliberately not part of the `Error` enum: they
//! never fail a session and are surfaced as [`CleanupWarning`] values.

use std::path::PathBuf;

use thiserror::Error;

/// Top-level error type.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Source(#[from] SourceError),

    #[error(transparent)]
    Secret(#[from] SecretError),

    #[error(transparent)]
    Artifact(#[from] ArtifactError),

    #[error("prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration file errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("not initialized: run `satchel init` first")]
    NotInitialized,

    #[error("already initialized: .satchel.toml exists")]
    AlreadyInitialized,

    #[error("could not read config: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("could not write config: {0}")]
    WriteFile(#[source] std::io::Error),

    #[error("config parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("config serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("missing field `{field}`")]
    MissingField { field: &'static str },

    #[error("invalid value for `{field}`: {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

/// Secret source errors.
#[derive(Error, Debug)]
pub enum SourceError {
    /// The source could not resolve a requested secret name.
    #[error("secret not found: {0}")]
    Unresolved(String),

    /// The source backend failed in a way that is not "name unknown".
    #[error("source failure for `{name}`: {reason}")]
    Backend { name: String, reason: String },

    /// The configured fetch command does not exist on this system.
    #[error("fetch command not found: {0}")]
    MissingCommand(String),
}

/// Secret validation errors.
#[derive(Error, Debug)]
pub enum SecretError {
    /// A resolved secret had an empty or whitespace-only payload.
    #[error("secret `{0}` resolved to an empty value")]
    Empty(String),

    /// A session was started with no secret names at all.
    #[error("no secrets requested")]
    NoneRequested,
}

/// Artifact materialization errors.
#[derive(Error, Debug)]
pub enum ArtifactError {
    #[error("could not create scratch directory {}: {source}", .path.display())]
    Scratch {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("could not write secret file for `{name}`: {source}")]
    Write {
        name: String,
        #[source]
        source: std::io::Error,
    },
}

/// A failed deletion during session teardown.
///
/// Non-fatal: the session's outcome is unchanged, every remaining artifact
/// is still swept, and the warning is logged and handed back to the caller.
#[derive(Error, Debug)]
#[error("could not remove {}: {error}", .path.display())]
pub struct CleanupWarning {
    /// Path of the artifact that survived the sweep.
    pub path: PathBuf,
    #[source]
    pub error: std::io::Error,
}

pub type Result<T> = std::result::Result<T, Error>;
