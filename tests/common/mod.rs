//! Shared testing utilities for promptlab CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const API_KEY_ENV: &str = "OPENROUTER_API_KEY";

/// Testing harness providing an isolated environment for CLI exercises.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");

        Self { root, work_dir }
    }

    /// Absolute path to the emulated `$HOME` directory.
    pub fn home(&self) -> &Path {
        self.root.path()
    }

    /// Path to the directory used for CLI invocations.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Build a command for the compiled `promptlab` binary with no API key set.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("promptlab").expect("Failed to locate promptlab binary");
        cmd.current_dir(self.work_dir())
            .env("HOME", self.home())
            .env_remove(API_KEY_ENV)
            .env_remove("PROMPTLAB_LOG");
        cmd
    }

    /// Like `cli`, with an API key in the environment.
    pub fn cli_with_key(&self) -> Command {
        let mut cmd = self.cli();
        cmd.env(API_KEY_ENV, "sk-test");
        cmd
    }

    /// Write `promptlab.toml` in the work directory pointing at `endpoint`.
    pub fn write_config(&self, endpoint: &str) -> PathBuf {
        let path = self.work_dir.join("promptlab.toml");
        let content = format!("[api]\nendpoint = \"{}\"\ntimeout_secs = 5\n", endpoint);
        fs::write(&path, content).expect("Failed to write config");
        path
    }

    /// Write a file under the work directory.
    pub fn write_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.work_dir.join(name);
        fs::write(&path, content).expect("Failed to write file");
        path
    }
}

/// Arguments for a complete subject.
pub const SUBJECT: [&str; 8] =
    ["--first-name", "John", "--last-name", "Smith", "--city", "Phoenix", "--state", "AZ"];
