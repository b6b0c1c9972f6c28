//! Tracing subscriber setup.
//!
//! The terminal UI owns stdout, so interactive sessions log to a file.
//! Headless commands log to stderr.

use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Where log records go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    /// Standard error (headless commands)
    Stderr,
    /// Append to a file (terminal UI)
    File(PathBuf),
}

/// Builds the level filter: `RUST_LOG` wins, then `--verbose`, then the configured level.
fn build_filter(level: &str, verbose: bool) -> EnvFilter {
    let default = if verbose { "debug" } else { level };
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

/// Installs the global subscriber.
pub fn init_logging(level: &str, verbose: bool, target: LogTarget) -> Result<()> {
    let filter = build_filter(level, verbose);

    match target {
        LogTarget::Stderr => tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .try_init()
            .context("Failed to initialize logging")?,
        LogTarget::File(path) => {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent).context(format!(
                    "Failed to create log directory: {}",
                    parent.display()
                ))?;
            }
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&path)
                .context(format!("Failed to open log file: {}", path.display()))?;

            tracing_subscriber::registry()
                .with(filter)
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_ansi(false)
                        .with_writer(Mutex::new(file)),
                )
                .try_init()
                .context("Failed to initialize logging")?;
        }
    }

    Ok(())
}
