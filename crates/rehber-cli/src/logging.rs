use crate::config::Config;
use crate::types::LogLevel;
use anyhow::{Context, Result};
use std::fs::OpenOptions;

/// Route `log` records to the configured log file.
///
/// The TUI owns stdout and stderr while it runs, so nothing is written to the
/// terminal. `RUST_LOG` takes precedence over `--log-level`; `--verbose`
/// raises the level to at least debug. The file is truncated on every start.
pub fn init(config: &Config, level: LogLevel) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(&config.log_file)
        .with_context(|| format!("Failed to open log file: {}", config.log_file.display()))?;

    let mut filter: log::LevelFilter = level.into();
    if config.verbose {
        filter = filter.max(log::LevelFilter::Debug);
    }

    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(filter.as_str()));
    builder
        .format_timestamp_millis()
        .target(env_logger::Target::Pipe(Box::new(file)));

    // A second init in the same process (tests) keeps the first logger
    if builder.try_init().is_err() {
        log::debug!("logger already installed");
    }

    log::info!(
        "rehber {} starting, data dir {}",
        env!("CARGO_PKG_VERSION"),
        config.data_dir.display()
    );
    Ok(())
}
