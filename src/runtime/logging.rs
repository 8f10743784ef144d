//! File-backed `tracing` setup. The terminal belongs to the TUI, so nothing
//! is written to stdout or stderr once the player is running.

use std::fs::{self, OpenOptions};
use std::sync::Mutex;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use crate::config::{LogSettings, default_log_path};

/// Install the global subscriber. Without a usable log path, logging stays off.
pub fn init(settings: &LogSettings) -> anyhow::Result<()> {
    let Some(path) = settings.file.clone().or_else(default_log_path) else {
        return Ok(());
    };

    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("opening log file {}", path.display()))?;

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&settings.level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("installing log subscriber: {e}"))?;

    Ok(())
}
