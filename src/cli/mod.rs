//! Command-line interface.

pub mod check;
pub mod completions;
pub mod init;
pub mod list;
pub mod output;
pub mod run;

use clap::{Parser, Subcommand};

/// Satchel - scoped secret injection for commands.
#[derive(Parser)]
#[command(
    name = "satchel",
    about = "Run commands with secrets materialized as ephemeral files",
    version
)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands.
#[derive(Subcommand)]
pub enum Command {
    /// Write a starter .satchel.toml in the current directory
    Init {
        /// Overwrite an existing config without asking
        #[arg(long)]
        force: bool,
    },

    /// Run a command with secret files exposed through the binding variable
    Run {
        /// Secret name to materialize (repeatable; defaults to [secrets].names)
        #[arg(short = 's', long = "secret", value_name = "NAME")]
        secrets: Vec<String>,

        /// Command and arguments to run
        #[arg(trailing_var_arg = true, required = true)]
        command: Vec<String>,
    },

    /// Resolve and validate every configured secret, leaving nothing behind
    Check,

    /// List configured secret names
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Supported shells for completions.
#[derive(clap::ValueEnum, Clone, Debug)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}

/// Execute a command.
pub fn execute(command: Command) -> crate::error::Result<()> {
    use Command::*;

    match command {
        Init { force } => init::execute(force),
        Run { secrets, command } => run::execute(&secrets, &command),
        Check => check::execute(),
        List { json } => list::execute(json),
        Completions { shell } => completions::execute(shell),
    }
}
