use crate::types::LogLevel;
use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Where log lines go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    Stderr,
    File(PathBuf),
    /// The TUI owns the terminal and no log file was configured.
    Off,
}

/// Install the global subscriber. `RUST_LOG` overrides `level` when set.
pub fn init(level: LogLevel, target: LogTarget) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.to_string()));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false);

    let installed = match target {
        LogTarget::Off => return Ok(()),
        LogTarget::Stderr => builder.with_writer(std::io::stderr).try_init(),
        LogTarget::File(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&path)
                .with_context(|| format!("Failed to open log file: {}", path.display()))?;
            builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
        }
    };

    // A second init (e.g. from tests) keeps the first subscriber
    if let Err(e) = installed {
        tracing::debug!("subscriber already installed: {}", e);
    }
    Ok(())
}
