//! Settings — optional YAML file at ~/.termfolio/config.yaml, overridable from the CLI.

use std::path::{Path, PathBuf};
use std::time::Duration;

use chrono::FixedOffset;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::session::{clock, SessionOptions, DEFAULT_TYPING_INTERVAL};

/// Errors raised while loading settings.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
    #[error("utc offset of {0} minutes is out of range")]
    InvalidOffset(i32),
}

/// The termfolio directory under the user's home.
pub fn config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".termfolio"))
}

/// Default settings file location.
pub fn default_config_path() -> Option<PathBuf> {
    config_dir().map(|d| d.join("config.yaml"))
}

/// User-tunable settings. Every field is optional in the file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Settings {
    /// Name of a built-in theme (case-insensitive) or of the theme in theme.yaml.
    pub theme: Option<String>,
    /// Milliseconds between revealed characters; 0 disables the animation.
    pub typing_interval_ms: u64,
    /// Footer clock timezone as minutes east of UTC.
    pub utc_offset_minutes: i32,
    /// Where diagnostics go. Defaults to the system temp dir.
    pub log_file: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: None,
            typing_interval_ms: DEFAULT_TYPING_INTERVAL.as_millis() as u64,
            utc_offset_minutes: clock::IST_OFFSET_SECS / 60,
            log_file: None,
        }
    }
}

impl Settings {
    /// Load ~/.termfolio/config.yaml, or defaults if it does not exist.
    pub fn load_default() -> Result<Self, ConfigError> {
        match default_config_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Load settings from an explicit path. A missing file is an error.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Parse settings from YAML; missing fields take their defaults.
    pub fn from_yaml(yaml: &str) -> Result<Self, serde_yaml::Error> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(yaml)
    }

    /// Apply command-line overrides on top of file values.
    pub fn apply_overrides(
        &mut self,
        theme: Option<String>,
        typing_interval_ms: Option<u64>,
        log_file: Option<PathBuf>,
    ) {
        if theme.is_some() {
            self.theme = theme;
        }
        if let Some(ms) = typing_interval_ms {
            self.typing_interval_ms = ms;
        }
        if log_file.is_some() {
            self.log_file = log_file;
        }
    }

    pub fn typing_interval(&self) -> Duration {
        Duration::from_millis(self.typing_interval_ms)
    }

    pub fn utc_offset(&self) -> Result<FixedOffset, ConfigError> {
        self.utc_offset_minutes
            .checked_mul(60)
            .and_then(FixedOffset::east_opt)
            .ok_or(ConfigError::InvalidOffset(self.utc_offset_minutes))
    }

    /// Session options derived from these settings.
    pub fn session_options(&self) -> Result<SessionOptions, ConfigError> {
        Ok(SessionOptions {
            typing_interval: self.typing_interval(),
            utc_offset: self.utc_offset()?,
        })
    }
}
