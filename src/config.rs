//! Settings: load from a TOML file in the platform config directory.
//!
//! The settings file lives in the OS-standard location (via `directories`):
//! - Linux: ~/.config/scramble/config.toml
//! - macOS: ~/Library/Application Support/scramble/config.toml
//! - Windows: %APPDATA%\scramble\config\config.toml
//!
//! Every key is optional. Command-line flags override file values.

use crate::error::ConfigError;
use crate::game::DEFAULT_LOCALE;
use directories::ProjectDirs;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

const APP_NAME: &str = "scramble";
const CONFIG_FILENAME: &str = "config.toml";
const LOG_FILENAME: &str = "scramble.log";

/// User settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Locale passed to the dictionary
    pub locale: String,
    /// Word list replacing the embedded dictionary
    pub dictionary: Option<PathBuf>,
    /// Word list replacing the embedded root words
    pub roots: Option<PathBuf>,
    /// Where the terminal game writes its log
    pub log_file: Option<PathBuf>,
    /// Default log filter when `RUST_LOG` is unset
    pub log_level: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            locale: DEFAULT_LOCALE.to_string(),
            dictionary: None,
            roots: None,
            log_file: None,
            log_level: "info".to_string(),
        }
    }
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("", "", APP_NAME)
}

/// Default location of the settings file.
pub fn settings_path() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().join(CONFIG_FILENAME))
}

/// Default location of the log file.
pub fn default_log_file() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.data_dir().join(LOG_FILENAME))
}

impl Settings {
    /// Parse settings text. `path` is only used in error messages.
    pub fn parse(path: &Path, text: &str) -> Result<Self, ConfigError> {
        toml::from_str(text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load settings from an explicit file, which must exist.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = Self::parse(path, &text)?;
        debug!(path = %path.display(), "loaded settings");
        Ok(settings)
    }

    /// Load settings from `explicit`, or from the default location.
    ///
    /// A missing file at the default location, or no config directory on
    /// this platform, yields default settings.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => Self::load_from(path),
            None => Self::load_default(settings_path().as_deref()),
        }
    }

    fn load_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        let Some(path) = path else {
            debug!("no config directory, using defaults");
            return Ok(Self::default());
        };
        if !path.exists() {
            debug!(path = %path.display(), "no settings file, using defaults");
            return Ok(Self::default());
        }
        Self::load_from(path)
    }

    /// Log file to use: configured, else the platform default.
    pub fn resolved_log_file(&self) -> Option<PathBuf> {
        self.log_file.clone().or_else(default_log_file)
    }
}
