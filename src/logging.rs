//! File logging
//!
//! The terminal belongs to the dashboard, so log output goes to a file under
//! the data directory. Verbosity comes from `ESTATE_LOG` (an `EnvFilter`
//! directive such as `debug` or `estate=trace`), defaulting to `info`.

use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use crate::config;

pub const LOG_ENV: &str = "ESTATE_LOG";

pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"))
}

pub fn open_log_file(path: &Path) -> Result<File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("create log dir {}", parent.display()))?;
    }
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("open log file {}", path.display()))
}

/// Installs the global subscriber. Returns the log path when logging is on.
pub fn init() -> Option<PathBuf> {
    let path = config::log_path()?;
    let file = open_log_file(&path).ok()?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .ok()?;
    Some(path)
}
