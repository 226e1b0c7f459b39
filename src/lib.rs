//! Satchel - scoped secret injection for commands.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── init          # Write a starter config
//! │   ├── run           # Run a command inside a secret session
//! │   ├── check         # Resolve and validate configured secrets
//! │   ├── list          # List configured secret names
//! │   └── completions   # Shell completions
//! └── core/             # Core library components
//!     ├── config        # .satchel.toml management
//!     ├── source/       # Secret source backends
//!     │   ├── mod       # SecretSource trait
//!     │   ├── dir       # Directory of secret files
//!     │   ├── env       # Process environment
//!     │   └── cmd       # External fetch command
//!     ├── artifact      # Ephemeral secret files
//!     ├── binding       # Paths exposed to the wrapped command
//!     └── session       # Scoped session: fetch, materialize, run, sweep
//! ```
//!
//! # Guarantees
//!
//! - Secret files exist only while the wrapped action runs
//! - Every exit path inside the process deletes them, including panics
//! - Failed deletions are reported, never silently dropped
//! - Concurrent sessions never share or reuse artifact paths
//!
//! The one documented gap: abrupt process termination (kill -9, power
//! loss) during the action can leave files in the scratch directory.

pub mod cli;
pub mod core;
pub mod error;
