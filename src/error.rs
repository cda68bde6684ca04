//! Error types for the game engine and its surrounding application

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised when a game cannot be started.
///
/// Per-submission rejections are not errors; see [`crate::game::Rejection`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// Root word is empty or contains non-alphabetic characters
    #[error("invalid root word '{0}': must be non-empty and alphabetic")]
    InvalidRoot(String),
}

/// Errors loading a word list from disk.
#[derive(Debug, Error)]
pub enum WordListError {
    #[error("failed to read word list {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors loading the settings file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}
