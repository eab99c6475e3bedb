//! Assertions on CLI output.

use anyhow::{Context, Result};

use crate::world::CliResult;

/// Read the integer printed after `label` on its own line of stdout,
/// e.g. `People:      3`.
pub fn count_after(result: &CliResult, label: &str) -> Result<usize> {
    let line = result
        .stdout()
        .lines()
        .find(|line| line.starts_with(label))
        .with_context(|| format!("no line starting with '{}' in stdout", label))?;

    let value = line[label.len()..]
        .split_whitespace()
        .next()
        .with_context(|| format!("no value after '{}'", label))?;

    value
        .parse()
        .with_context(|| format!("'{}' is not a count", value))
}

/// Assert the command failed with an `Error:` line mentioning `needle`.
pub fn assert_failed_with(result: &CliResult, needle: &str) -> Result<()> {
    if result.success() {
        anyhow::bail!("expected failure, got success\nstdout: {}", result.stdout());
    }

    let stderr = result.stderr();
    if !stderr.starts_with("Error:") {
        anyhow::bail!("stderr does not start with 'Error:': {}", stderr);
    }
    if !stderr.contains(needle) {
        anyhow::bail!("stderr does not mention '{}': {}", needle, stderr);
    }

    Ok(())
}
