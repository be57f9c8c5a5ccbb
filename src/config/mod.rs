use std::fs;
use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDate};
use serde::Deserialize;
use thiserror::Error;

use crate::app::pinned_date;
use crate::domain::TabId;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Config {
    /// Tab selected on startup
    #[serde(default)]
    pub start_tab: Option<TabId>,

    /// Footer date override
    #[serde(default)]
    pub date: Option<NaiveDate>,

    /// Show the system's local date instead of the pinned one
    #[serde(default)]
    pub live_clock: bool,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Where the footer date comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateSource {
    Pinned(NaiveDate),
    LiveClock,
}

impl DateSource {
    pub fn today(&self) -> NaiveDate {
        match self {
            DateSource::Pinned(date) => *date,
            DateSource::LiveClock => Local::now().date_naive(),
        }
    }
}

impl Config {
    /// CLI values win over config values; the pinned date is the fallback.
    pub fn date_source(&self, cli_date: Option<NaiveDate>, cli_live_clock: bool) -> DateSource {
        if let Some(date) = cli_date {
            return DateSource::Pinned(date);
        }
        if cli_live_clock {
            return DateSource::LiveClock;
        }
        if let Some(date) = self.date {
            return DateSource::Pinned(date);
        }
        if self.live_clock {
            return DateSource::LiveClock;
        }
        DateSource::Pinned(pinned_date())
    }

    pub fn start_tab(&self, cli_tab: Option<TabId>) -> TabId {
        cli_tab.or(self.start_tab).unwrap_or_default()
    }
}

pub fn parse(content: &str, path: &Path) -> Result<Config, ConfigError> {
    toml::from_str::<Config>(content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Load the config at `path`. A missing file yields the defaults.
pub fn load_from(path: &Path) -> Result<Config, ConfigError> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(Config::default()),
        Err(source) => {
            return Err(ConfigError::Read {
                path: path.to_path_buf(),
                source,
            })
        }
    };
    parse(&content, path)
}

/// The file a session reads: the explicit path if given, else the default location.
pub fn resolve_path(explicit: Option<&Path>) -> Option<PathBuf> {
    explicit.map(Path::to_path_buf).or_else(config_path)
}

/// Load the config, falling back to defaults on any problem.
pub fn load(explicit: Option<&Path>) -> Config {
    let Some(path) = resolve_path(explicit) else {
        return Config::default();
    };
    match load_from(&path) {
        Ok(config) => {
            tracing::debug!(path = %path.display(), ?config, "config loaded");
            config
        }
        Err(err) => {
            tracing::warn!(error = %err, "using default config");
            Config::default()
        }
    }
}

pub fn config_path() -> Option<PathBuf> {
    if let Some(path) = std::env::var_os("ESTATE_CONFIG").map(PathBuf::from) {
        return Some(path);
    }
    if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME").map(PathBuf::from) {
        return Some(xdg.join("estate").join("config.toml"));
    }
    if let Some(home) = std::env::var_os("HOME").map(PathBuf::from) {
        return Some(home.join(".config").join("estate").join("config.toml"));
    }

    directories::ProjectDirs::from("io", "estate", "estate")
        .map(|dirs| dirs.config_dir().join("config.toml"))
}

pub fn data_dir() -> Option<PathBuf> {
    if let Some(xdg) = std::env::var_os("XDG_DATA_HOME").map(PathBuf::from) {
        return Some(xdg.join("estate"));
    }
    if let Some(home) = std::env::var_os("HOME").map(PathBuf::from) {
        return Some(home.join(".local").join("share").join("estate"));
    }
    directories::ProjectDirs::from("io", "estate", "estate")
        .map(|dirs| dirs.data_dir().to_path_buf())
}

pub fn log_path() -> Option<PathBuf> {
    data_dir().map(|dir| dir.join("estate.log"))
}
