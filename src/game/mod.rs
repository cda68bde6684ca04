//! Game logic: root words, submissions, validation, scoring

pub mod dictionary;
pub mod roots;
pub mod score;
pub mod state;
pub mod validation;

pub use dictionary::{WordList, DEFAULT_LOCALE};
pub use roots::RootWords;
pub use state::{GameState, SubmitResult};
pub use validation::{Rejection, Validator};

use crate::error::GameError;
use std::fmt;

/// Normalize raw player input: trim surrounding whitespace and lowercase.
pub fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// The word whose letters every submission must be built from.
///
/// Always lowercase, non-empty and purely alphabetic.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RootWord(String);

impl RootWord {
    /// Build a root word from any string, normalizing it first.
    ///
    /// Fails with [`GameError::InvalidRoot`] if the normalized word is empty
    /// or contains anything other than letters.
    pub fn new(raw: &str) -> Result<Self, GameError> {
        let word = normalize(raw);
        if word.is_empty() || !word.chars().all(char::is_alphabetic) {
            return Err(GameError::InvalidRoot(raw.to_string()));
        }
        Ok(Self(word))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RootWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for RootWord {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
