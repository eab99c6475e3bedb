//! TestWorld pattern for declarative integration test setup.
//!
//! Every world owns a temp directory used as working directory, home and
//! config dir of the spawned binary, so no config file, `.env` file or
//! `REHBER_*` variable of the developer's machine leaks into a test.

use anyhow::Result;
use assert_cmd::Command;
use serde_json::Value;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::fixtures;

const ENV_VARS: [&str; 5] = [
    "RUST_LOG",
    "REHBER_NAME",
    "REHBER_VERBOSE",
    "REHBER_DATA_DIR",
    "REHBER_LOG_FILE",
];

/// Declarative test environment builder.
///
/// # Example
/// ```no_run
/// use rehber_testing::TestWorld;
///
/// let world = TestWorld::new().with_sample_data();
/// let result = world.run(&["check"]).unwrap();
/// assert!(result.success());
/// ```
pub struct TestWorld {
    temp_dir: TempDir,
    data_dir: PathBuf,
    log_file: PathBuf,
    env_vars: HashMap<String, String>,
}

impl Default for TestWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl TestWorld {
    /// Create an isolated environment with an empty data directory.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let data_dir = temp_dir.path().join("data");
        let log_file = temp_dir.path().join("rehber.log");

        std::fs::create_dir_all(&data_dir).expect("Failed to create data dir");

        Self {
            temp_dir,
            data_dir,
            log_file,
            env_vars: HashMap::new(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn log_file(&self) -> &Path {
        &self.log_file
    }

    /// Temp directory root, also the working directory of the binary
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Write the sample people and departments.
    pub fn with_sample_data(self) -> Self {
        self.with_data(fixtures::sample_people(), fixtures::sample_departments())
    }

    /// Write both data files from JSON values.
    pub fn with_data(self, people: Value, departments: Value) -> Self {
        self.write_data_file("people.json", &people.to_string())
            .expect("Failed to write people.json");
        self.write_data_file("departments.json", &departments.to_string())
            .expect("Failed to write departments.json");
        self
    }

    /// Write raw text into the data directory, e.g. a truncated document.
    pub fn write_data_file(&self, name: &str, content: &str) -> Result<()> {
        std::fs::write(self.data_dir.join(name), content)?;
        Ok(())
    }

    /// Write `config.toml` into the working directory.
    pub fn with_config(self, content: &str) -> Self {
        std::fs::write(self.root().join("config.toml"), content)
            .expect("Failed to write config.toml");
        self
    }

    /// Set an environment variable for CLI execution.
    pub fn with_env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env_vars.insert(key.into(), value.into());
        self
    }

    /// Configure a CLI command with this environment's directories and env.
    ///
    /// `--data-dir` and `--log-file` are only passed when `explicit_paths` is
    /// set, so config-file and env precedence can be tested too.
    pub fn configure_command<'a>(
        &self,
        cmd: &'a mut Command,
        explicit_paths: bool,
    ) -> &'a mut Command {
        if explicit_paths {
            cmd.arg("--data-dir")
                .arg(&self.data_dir)
                .arg("--log-file")
                .arg(&self.log_file);
        }

        cmd.current_dir(self.root())
            .env("HOME", self.root())
            .env("XDG_CONFIG_HOME", self.root().join(".config"));

        for key in ENV_VARS {
            cmd.env_remove(key);
        }
        for (key, value) in &self.env_vars {
            cmd.env(key, value);
        }

        cmd
    }

    /// Run the binary with this world's data dir and log file.
    pub fn run(&self, args: &[&str]) -> Result<CliResult> {
        self.execute(args, true)
    }

    /// Run the binary without path flags; paths come from config or env.
    pub fn run_bare(&self, args: &[&str]) -> Result<CliResult> {
        self.execute(args, false)
    }

    #[allow(deprecated)]
    fn execute(&self, args: &[&str], explicit_paths: bool) -> Result<CliResult> {
        let mut cmd = Command::cargo_bin("rehber")
            .map_err(|e| anyhow::anyhow!("Failed to find rehber binary: {}", e))?;

        self.configure_command(&mut cmd, explicit_paths);
        cmd.args(args);

        let output = cmd.output()?;

        Ok(CliResult {
            status: output.status,
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }

    /// Contents of the log file, empty if it was never written.
    pub fn log_contents(&self) -> String {
        std::fs::read_to_string(&self.log_file).unwrap_or_default()
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

    pub fn code(&self) -> Option<i32> {
        self.status.code()
    }

    pub fn stdout(&self) -> &str {
        &self.stdout
    }

    pub fn stderr(&self) -> &str {
        &self.stderr
    }
}
