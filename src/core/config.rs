//! Configuration file management.
//!
//! Handles reading, writing, and validating `.satchel.toml` configuration files.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::constants;
use crate::error::{ConfigError, Result};

/// Project configuration stored in `.satchel.toml`
///
/// Unknown keys are rejected during parsing rather than silently ignored,
/// so a typo in an option name fails loudly instead of falling back to a
/// default.
#[derive(Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Metadata about this configuration
    pub satchel: Meta,
    /// Secret source backend and its options
    pub source: SourceConfig,
    /// How artifact paths are exposed to the wrapped command
    #[serde(default)]
    pub binding: BindingConfig,
    /// Where secret files are materialized
    #[serde(default)]
    pub scratch: ScratchConfig,
    /// Default secret names for `run` and `check`
    #[serde(default)]
    pub secrets: SecretsConfig,
}

/// Metadata section of the configuration
#[derive(Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Meta {
    /// Configuration version
    pub version: String,
}

/// Which backend resolves secret names, and its options.
///
/// Options belong to exactly one backend; setting an option for a backend
/// other than the configured `kind` is a validation error.
#[derive(Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SourceConfig {
    /// Backend: "dir", "env", or "cmd"
    pub kind: SourceKind,
    /// Directory of secret files (dir backend)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
    /// Environment variable prefix (env backend)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
    /// External fetch command (cmd backend)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,
}

/// Secret source backend kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    /// A directory of plain files, one secret per file
    Dir,
    /// Process environment variables
    Env,
    /// An external command printing the secret to stdout
    Cmd,
}

impl std::fmt::Display for SourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SourceKind::Dir => write!(f, "dir"),
            SourceKind::Env => write!(f, "env"),
            SourceKind::Cmd => write!(f, "cmd"),
        }
    }
}

/// Binding section: the single environment variable handed to the command.
#[derive(Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BindingConfig {
    /// Variable name carrying the joined artifact paths
    #[serde(default = "default_binding_variable")]
    pub variable: String,
    /// Separator between paths in the joined value
    #[serde(default = "default_separator")]
    pub separator: String,
}

fn default_binding_variable() -> String {
    constants::DEFAULT_BINDING_VARIABLE.to_string()
}

fn default_separator() -> String {
    constants::DEFAULT_SEPARATOR.to_string()
}

impl Default for BindingConfig {
    fn default() -> Self {
        Self {
            variable: default_binding_variable(),
            separator: default_separator(),
        }
    }
}

/// Scratch section: where secret files live for the duration of a session.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScratchConfig {
    /// Scratch directory override.
    ///
    /// Defaults to a satchel directory under the user cache dir, which
    /// keeps artifacts out of the project working tree.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dir: Option<PathBuf>,
}

/// Secrets section: the default name list.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SecretsConfig {
    /// Secret names resolved by `run` (without --secret flags) and `check`
    #[serde(default)]
    pub names: Vec<String>,
}

impl Config {
    /// Create a new configuration with the given source and current version.
    pub fn new(source: SourceConfig) -> Self {
        Self {
            satchel: Meta {
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            source,
            binding: BindingConfig::default(),
            scratch: ScratchConfig::default(),
            secrets: SecretsConfig::default(),
        }
    }

    /// Path to the configuration file in the current directory
    pub fn config_path() -> PathBuf {
        PathBuf::from(constants::CONFIG_FILE)
    }

    /// Check if a configuration file exists in the current directory
    pub fn exists() -> bool {
        Self::config_path().exists()
    }

    /// Load configuration from `.satchel.toml` in the current directory.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotInitialized` if the file doesn't exist,
    /// or `ConfigError::Parse` if the TOML is malformed or contains
    /// unknown keys.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load configuration from an explicit path.
    pub fn load_from(path: &Path) -> Result<Self> {
        debug!(path = %path.display(), "loading config");

        if !path.exists() {
            return Err(ConfigError::NotInitialized.into());
        }
        let contents = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        let config: Self = toml::from_str(&contents).map_err(ConfigError::Parse)?;

        debug!(
            source = %config.source.kind,
            secrets = config.secrets.names.len(),
            "config loaded"
        );

        config.validate()?;

        Ok(config)
    }

    /// Save configuration to `.satchel.toml` in the current directory.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path())
    }

    /// Save configuration to an explicit path.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        debug!(path = %path.display(), "saving config");

        let contents = toml::to_string_pretty(self).map_err(ConfigError::Serialize)?;
        std::fs::write(path, contents).map_err(ConfigError::WriteFile)?;

        Ok(())
    }

    /// Scratch directory for this configuration.
    pub fn scratch_dir(&self) -> PathBuf {
        self.scratch
            .dir
            .clone()
            .unwrap_or_else(constants::default_scratch_dir)
    }

    /// Validate the configuration structure and contents
    ///
    /// Checks:
    /// - Version field is valid semver
    /// - Source options are consistent with the configured backend kind
    /// - Binding variable is a valid environment variable name
    /// - Separator and secret names are non-empty
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` or `ConfigError::MissingField` on
    /// validation failure.
    pub fn validate(&self) -> Result<()> {
        debug!("validating config");

        if self.satchel.version.is_empty() {
            return Err(ConfigError::MissingField { field: "version" }.into());
        }

        let version_parts: Vec<&str> = self.satchel.version.split('.').collect();
        if version_parts.len() < 2 {
            return Err(ConfigError::InvalidValue {
                field: "version",
                reason: format!("not a valid semver: {}", self.satchel.version),
            }
            .into());
        }

        self.source.validate()?;

        validate_variable_name(&self.binding.variable)?;

        if self.binding.separator.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "binding.separator",
                reason: "separator cannot be empty".to_string(),
            }
            .into());
        }

        for name in &self.secrets.names {
            if name.trim().is_empty() {
                return Err(ConfigError::InvalidValue {
                    field: "secrets.names",
                    reason: "secret names cannot be empty".to_string(),
                }
                .into());
            }
        }

        Ok(())
    }
}

impl SourceConfig {
    /// Check option/kind consistency.
    fn validate(&self) -> Result<()> {
        match self.kind {
            SourceKind::Dir => {
                if self.path.is_none() {
                    return Err(ConfigError::MissingField {
                        field: "source.path",
                    }
                    .into());
                }
                reject_option("source.prefix", SourceKind::Dir, self.prefix.is_some())?;
                reject_option("source.command", SourceKind::Dir, self.command.is_some())?;
            }
            SourceKind::Env => {
                reject_option("source.path", SourceKind::Env, self.path.is_some())?;
                reject_option("source.command", SourceKind::Env, self.command.is_some())?;
            }
            SourceKind::Cmd => {
                if self.command.is_none() {
                    return Err(ConfigError::MissingField {
                        field: "source.command",
                    }
                    .into());
                }
                reject_option("source.path", SourceKind::Cmd, self.path.is_some())?;
                reject_option("source.prefix", SourceKind::Cmd, self.prefix.is_some())?;
            }
        }
        Ok(())
    }
}

fn reject_option(field: &'static str, kind: SourceKind, set: bool) -> Result<()> {
    if set {
        return Err(ConfigError::InvalidValue {
            field,
            reason: format!("not an option of the `{}` backend", kind),
        }
        .into());
    }
    Ok(())
}

/// Ensure `.gitignore` contains entries to ignore the secret directory
///
/// Adds `.secrets/` if not already present.
///
/// # Errors
///
/// Returns error if file operations fail.
pub fn ensure_gitignore() -> Result<()> {
    let gitignore = Path::new(".gitignore");

    let existing = if gitignore.exists() {
        std::fs::read_to_string(gitignore)?
    } else {
        String::new()
    };

    let mut updated = existing.clone();
    for entry in constants::GITIGNORE_ENTRIES {
        if !existing.lines().any(|l| l.trim() == *entry) {
            if !updated.is_empty() && !updated.ends_with('\n') {
                updated.push('\n');
            }
            updated.push_str(entry);
            updated.push('\n');
        }
    }

    if updated != existing {
        std::fs::write(gitignore, updated)?;
    }

    Ok(())
}

/// Validate an environment variable name.
///
/// Must be non-empty, must not start with a digit, and may contain only
/// ASCII alphanumerics and underscore.
pub fn validate_variable_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(ConfigError::InvalidValue {
            field: "binding.variable",
            reason: "variable name cannot be empty".to_string(),
        }
        .into());
    }

    if let Some(first_char) = name.chars().next() {
        if first_char.is_ascii_digit() {
            return Err(ConfigError::InvalidValue {
                field: "binding.variable",
                reason: "variable name cannot start with a digit".to_string(),
            }
            .into());
        }
    }

    for (i, ch) in name.chars().enumerate() {
        if !ch.is_ascii_alphanumeric() && ch != '_' {
            return Err(ConfigError::InvalidValue {
                field: "binding.variable",
                reason: format!(
                    "invalid character '{}' at position {}. Only A-Z, 0-9, and underscore are allowed",
                    ch,
                    i + 1
                ),
            }
            .into());
        }
    }

    Ok(())
}
