//! TestWorld pattern for declarative CLI test setup.
//!
//! Each world owns a temp directory used as the loma workspace
//! (`LOMA_PATH`), so config and catalog files never touch the real one.

use anyhow::Result;
use assert_cmd::Command;
use loma_types::ListingRecord;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::fixtures;

/// Declarative test environment builder.
///
/// # Example
/// ```no_run
/// use loma_testing::TestWorld;
/// use loma_testing::fixtures::ListingBuilder;
///
/// let world = TestWorld::new()
///     .with_catalog(&[ListingBuilder::new(5).title("Kayak").build()]);
///
/// let result = world.run(&["show", "5"]).unwrap();
/// assert!(result.stdout().contains("Kayak"));
/// ```
pub struct TestWorld {
    temp_dir: TempDir,
    data_dir: PathBuf,
    env_vars: HashMap<String, String>,
}

impl Default for TestWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl TestWorld {
    /// Create a new isolated test environment.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let data_dir = temp_dir.path().join(".loma");
        std::fs::create_dir_all(&data_dir).expect("Failed to create data dir");

        Self {
            temp_dir,
            data_dir,
            env_vars: HashMap::new(),
        }
    }

    /// Workspace directory handed to the CLI through `LOMA_PATH`.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn temp_dir(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn config_path(&self) -> PathBuf {
        self.data_dir.join("config.toml")
    }

    pub fn catalog_path(&self) -> PathBuf {
        self.data_dir.join("catalog.json")
    }

    /// Set an environment variable for CLI execution.
    pub fn with_env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env_vars.insert(key.into(), value.into());
        self
    }

    /// Write `catalog.json` and point the workspace config at it.
    pub fn with_catalog(self, records: &[ListingRecord]) -> Self {
        fixtures::write_catalog(&self.catalog_path(), records).expect("Failed to write catalog");
        self.with_config("catalog = \"catalog.json\"\n")
    }

    /// Write raw catalog text, for malformed-file scenarios.
    pub fn with_raw_catalog(self, content: &str) -> Self {
        std::fs::write(self.catalog_path(), content).expect("Failed to write catalog");
        self.with_config("catalog = \"catalog.json\"\n")
    }

    /// Replace `config.toml` with the given TOML text.
    pub fn with_config(self, content: &str) -> Self {
        std::fs::write(self.config_path(), content).expect("Failed to write config");
        self
    }

    /// Configure a CLI command with this test environment's settings.
    pub fn configure_command<'a>(&self, cmd: &'a mut Command) -> &'a mut Command {
        cmd.current_dir(self.temp_dir.path())
            .env("LOMA_PATH", &self.data_dir)
            .env_remove("RUST_LOG");

        for (key, value) in &self.env_vars {
            cmd.env(key, value);
        }

        cmd
    }

    /// Create a configured command for the `loma` binary.
    #[allow(deprecated)]
    pub fn command(&self) -> Result<Command> {
        let mut cmd = Command::cargo_bin("loma")
            .map_err(|e| anyhow::anyhow!("Failed to find loma binary: {}", e))?;
        self.configure_command(&mut cmd);
        Ok(cmd)
    }

    /// Execute the binary with `args` and capture its output.
    pub fn run(&self, args: &[&str]) -> Result<CliResult> {
        let mut cmd = self.command()?;
        cmd.args(args);

        let output = cmd.output()?;

        Ok(CliResult {
            status: output.status,
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }
}

/// Result of a CLI command execution.
#[derive(Debug)]
pub struct CliResult {
    pub status: std::process::ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

impl CliResult {
    pub fn success(&self) -> bool {
        self.status.success()
    }

    /// Parse stdout as JSON.
    pub fn json(&self) -> Result<serde_json::Value> {
        Ok(serde_json::from_str(&self.stdout)?)
    }

    pub fn stdout(&self) -> &str {
        &self.stdout
    }

    pub fn stderr(&self) -> &str {
        &self.stderr
    }
}
