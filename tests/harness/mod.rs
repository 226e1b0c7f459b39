//! Test harness utilities for satchel integration tests.
//!
//! Provides reusable test environment setup and helper commands.

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use std::process::Output;
use tempfile::TempDir;

/// Test environment with isolated temp directories.
///
/// The project directory, home directory, and scratch directory are all
/// temporary, so tests never touch real user state and can inspect the
/// scratch directory after a run.
pub struct TestEnv {
    /// Temporary directory for the test project
    pub dir: TempDir,
    /// Temporary home directory
    pub home: TempDir,
    /// Temporary scratch directory for materialized secret files
    pub scratch: TempDir,
}

impl TestEnv {
    /// Create a new test environment.
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("failed to create temp dir"),
            home: TempDir::new().expect("failed to create temp home"),
            scratch: TempDir::new().expect("failed to create temp scratch"),
        }
    }

    /// Create a satchel command with correct environment variables.
    ///
    /// Returns a Command configured with:
    /// - HOME set to the temporary home directory
    /// - Current directory set to the test project directory
    /// - Colors disabled for stable assertions
    pub fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("satchel").expect("failed to find satchel binary");
        cmd.env("HOME", self.home.path());
        cmd.env_remove("XDG_CACHE_HOME");
        cmd.env("NO_COLOR", "1");
        cmd.current_dir(self.dir.path());
        cmd
    }

    /// Shortcut for `satchel init --force`.
    pub fn init(&self) -> Output {
        self.cmd()
            .args(["init", "--force"])
            .output()
            .expect("failed to run satchel init")
    }

    /// Write a `.satchel.toml` with the dir backend, the given default
    /// names, and the isolated scratch directory.
    pub fn write_config(&self, names: &[&str]) {
        let names = names
            .iter()
            .map(|n| format!("\"{}\"", n))
            .collect::<Vec<_>>()
            .join(", ");
        let contents = format!(
            r#"[satchel]
version = "0.1.0"

[source]
kind = "dir"
path = ".secrets"

[scratch]
dir = "{}"

[secrets]
names = [{}]
"#,
            self.scratch.path().display(),
            names
        );
        std::fs::write(self.dir.path().join(".satchel.toml"), contents)
            .expect("failed to write config");
    }

    /// Write a secret file for the dir backend.
    pub fn add_secret(&self, name: &str, contents: &str) {
        let dir = self.dir.path().join(".secrets");
        std::fs::create_dir_all(&dir).expect("failed to create secret dir");
        std::fs::write(dir.join(name), contents).expect("failed to write secret file");
    }

    /// Shortcut for `satchel run -- <command>`.
    pub fn run(&self, command: &[&str]) -> Output {
        self.cmd()
            .arg("run")
            .arg("--")
            .args(command)
            .output()
            .expect("failed to run satchel run")
    }

    /// Files currently present in the scratch directory.
    pub fn scratch_files(&self) -> Vec<PathBuf> {
        scratch_entries(self.scratch.path())
    }
}

fn scratch_entries(path: &Path) -> Vec<PathBuf> {
    match std::fs::read_dir(path) {
        Ok(entries) => entries
            .filter_map(|e| e.ok().map(|e| e.path()))
            .collect(),
        Err(_) => Vec::new(),
    }
}

/// Assert the command exited successfully, printing stderr on failure.
pub fn assert_success(output: &Output) {
    assert!(
        output.status.success(),
        "command failed\nstdout: {}\nstderr: {}",
        stdout(output),
        stderr(output)
    );
}

/// Assert the command failed.
pub fn assert_failure(output: &Output) {
    assert!(
        !output.status.success(),
        "command unexpectedly succeeded\nstdout: {}",
        stdout(output)
    );
}

/// Command stdout as a string.
pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

/// Command stderr as a string.
pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}
