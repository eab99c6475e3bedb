use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const APP_NAME: &str = "rehber";
pub const CONFIG_FILE: &str = "config.toml";
pub const ENV_PREFIX: &str = "REHBER_";

/// Settings shared by every subcommand.
///
/// Built once per process: defaults, then the config file, then `REHBER_*`
/// environment variables, then command-line flags.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Who `hello` greets
    pub name: String,
    pub verbose: bool,
    pub data_dir: PathBuf,
    pub log_file: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            name: "world".to_string(),
            verbose: false,
            data_dir: PathBuf::from("data"),
            log_file: PathBuf::from("output.log"),
        }
    }
}

/// Values given on the command line; `None` / `false` leaves the lower layers alone
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub name: Option<String>,
    pub verbose: bool,
    pub data_dir: Option<PathBuf>,
    pub log_file: Option<PathBuf>,
}

/// Result of [`Config::resolve`]
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub config: Config,
    /// The file that was read, if any
    pub source: Option<PathBuf>,
}

impl Config {
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        Ok(config)
    }

    /// Candidate config files, most specific first
    pub fn search_paths() -> Vec<PathBuf> {
        let mut paths = vec![PathBuf::from(CONFIG_FILE)];
        if let Some(config_dir) = dirs::config_dir() {
            paths.push(config_dir.join(APP_NAME).join(CONFIG_FILE));
        }
        paths.push(PathBuf::from("/etc").join(APP_NAME).join(CONFIG_FILE));
        paths
    }

    /// Pick the config file to read. An explicit path must exist; otherwise the
    /// first existing search path wins and having none is fine.
    pub fn discover(explicit: Option<&Path>) -> Result<Option<PathBuf>> {
        if let Some(path) = explicit {
            if !path.exists() {
                bail!("Config file not found: {}", path.display());
            }
            return Ok(Some(path.to_path_buf()));
        }

        Ok(Self::search_paths().into_iter().find(|p| p.is_file()))
    }

    /// Apply `REHBER_NAME`, `REHBER_VERBOSE`, `REHBER_DATA_DIR` and `REHBER_LOG_FILE`
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(&format!("{}{}", ENV_PREFIX, key)).filter(|v| !v.is_empty());

        if let Some(name) = var("NAME") {
            self.name = name;
        }
        if let Some(verbose) = var("VERBOSE") {
            self.verbose = parse_bool(&verbose);
        }
        if let Some(data_dir) = var("DATA_DIR") {
            self.data_dir = PathBuf::from(data_dir);
        }
        if let Some(log_file) = var("LOG_FILE") {
            self.log_file = PathBuf::from(log_file);
        }
    }

    pub fn apply_overrides(&mut self, overrides: &Overrides) {
        if let Some(name) = &overrides.name {
            self.name = name.clone();
        }
        if overrides.verbose {
            self.verbose = true;
        }
        if let Some(data_dir) = &overrides.data_dir {
            self.data_dir = data_dir.clone();
        }
        if let Some(log_file) = &overrides.log_file {
            self.log_file = log_file.clone();
        }
    }

    /// Build the effective configuration from every layer.
    ///
    /// A `.env` file in the working directory is loaded into the process
    /// environment first; variables that are already set win over it.
    pub fn resolve(explicit: Option<&Path>, overrides: &Overrides) -> Result<ResolvedConfig> {
        let _ = dotenvy::dotenv();
        Self::resolve_with_env(explicit, overrides, |key| std::env::var(key).ok())
    }

    pub fn resolve_with_env<F>(
        explicit: Option<&Path>,
        overrides: &Overrides,
        lookup: F,
    ) -> Result<ResolvedConfig>
    where
        F: Fn(&str) -> Option<String>,
    {
        let source = Self::discover(explicit)?;
        let mut config = match &source {
            Some(path) => Self::load_from(path)?,
            None => Self::default(),
        };
        config.apply_env(lookup);
        config.apply_overrides(overrides);

        Ok(ResolvedConfig { config, source })
    }
}

fn parse_bool(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
