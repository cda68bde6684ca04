//! Game state: root word, accepted words, score

use super::score;
use super::validation::{Rejection, ValidationOutcome, Validator};
use super::{normalize, RootWord};
use crate::error::GameError;
use tracing::trace;

/// Outcome of a single submission
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitResult {
    /// Word added to the history; `score` is the new total
    Accepted { word: String, score: f64 },
    /// Nothing changed
    Rejected(Rejection),
}

impl SubmitResult {
    #[cfg(test)]
    pub fn is_accepted(&self) -> bool {
        matches!(self, SubmitResult::Accepted { .. })
    }
}

/// One round of play.
///
/// The root word is fixed for the lifetime of the state. Accepted words are
/// kept most-recent-first and the score is always derived from them.
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    root: RootWord,
    history: Vec<String>,
}

impl GameState {
    /// Start a round on `root`.
    ///
    /// Fails with [`GameError::InvalidRoot`] if the root is empty or not
    /// purely alphabetic.
    pub fn start(root: &str) -> Result<Self, GameError> {
        Ok(Self::with_root(RootWord::new(root)?))
    }

    pub fn with_root(root: RootWord) -> Self {
        Self {
            root,
            history: Vec::new(),
        }
    }

    /// Submit raw player input.
    ///
    /// The input is trimmed and lowercased, then checked by `validator`.
    /// Only an accepted word changes the state.
    pub fn submit(&mut self, raw: &str, validator: &Validator<'_>) -> SubmitResult {
        let candidate = normalize(raw);
        if candidate.is_empty() {
            return SubmitResult::Rejected(Rejection::EmptySubmission);
        }

        match validator.validate(&self.root, &self.history, &candidate) {
            ValidationOutcome::Accepted => {
                self.history.insert(0, candidate.clone());
                let score = self.score();
                trace!(word = %candidate, score, "accepted");
                SubmitResult::Accepted {
                    word: candidate,
                    score,
                }
            }
            ValidationOutcome::Rejected(reason) => {
                trace!(word = %candidate, %reason, "rejected");
                SubmitResult::Rejected(reason)
            }
        }
    }

    /// Current score, recomputed from the accepted words.
    pub fn score(&self) -> f64 {
        score::score(&self.history)
    }

    /// A fresh round on `new_root`. `self` is left untouched.
    pub fn reset(&self, new_root: &str) -> Result<GameState, GameError> {
        Self::start(new_root)
    }

    pub fn root(&self) -> &RootWord {
        &self.root
    }

    /// Accepted words, most recent first
    pub fn history(&self) -> &[String] {
        &self.history
    }

    pub fn word_count(&self) -> usize {
        self.history.len()
    }

    pub fn letter_count(&self) -> usize {
        score::letter_count(&self.history)
    }
}
