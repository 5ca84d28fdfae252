// Logging
// File-backed tracing setup; the terminal itself belongs to the UI

use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use crate::core::LoggingConfig;

/// Build the log filter; RUST_LOG wins over the configured directives
pub fn build_filter(configured: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(configured))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install the global subscriber
/// `override_file` (from the command line) takes precedence over the config
/// Returns false when no log file is configured and logging stays off
pub fn init_logging(config: &LoggingConfig, override_file: Option<PathBuf>) -> Result<bool> {
    let Some(path) = override_file.or_else(|| config.file.clone()) else {
        return Ok(false);
    };

    let log_file = open_log_file(&path)?;

    tracing_subscriber::fmt()
        .with_env_filter(build_filter(&config.filter))
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .map_err(|err| anyhow::anyhow!("failed to install tracing subscriber: {err}"))?;

    Ok(true)
}

/// Open `path` for appending, creating parent directories as needed
fn open_log_file(path: &Path) -> Result<fs::File> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create log directory {}", parent.display()))?;
    }
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open log file {}", path.display()))
}
