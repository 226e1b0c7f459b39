//! Constants used throughout satchel.
//!
//! Centralizes magic strings and configuration defaults.

use std::path::PathBuf;

/// Configuration file name (.satchel.toml).
pub const CONFIG_FILE: &str = ".satchel.toml";

/// Default environment variable carrying the joined artifact paths.
pub const DEFAULT_BINDING_VARIABLE: &str = "SATCHEL_SECRET_FILES";

/// Default separator between artifact paths in the binding value.
pub const DEFAULT_SEPARATOR: &str = ",";

/// Filename prefix for materialized secret files.
pub const ARTIFACT_PREFIX: &str = "satchel-";

/// Random characters appended to each artifact filename.
///
/// Wide enough that concurrent sessions in one process never collide.
pub const ARTIFACT_RAND_LEN: usize = 12;

/// Default secret directory for the dir source backend.
pub const DEFAULT_SECRET_DIR: &str = ".secrets";

/// Gitignore entries to protect plaintext secrets.
///
/// These entries ensure the dir backend's secret files are not committed.
pub const GITIGNORE_ENTRIES: &[&str] = &[".secrets/"];

/// Default scratch directory for materialized secret files.
///
/// Lives under the user cache directory so artifacts stay outside any
/// project working tree (and outside anything that archives it). Falls
/// back to the system temp directory when no cache directory exists.
pub fn default_scratch_dir() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("satchel")
}
