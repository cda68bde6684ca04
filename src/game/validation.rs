//! Word validation for the scramble game
//!
//! Validates a normalized submission against, in this order:
//! 1. Originality (not already accepted this round)
//! 2. Letter availability in the root word (with multiplicity)
//! 3. Dictionary presence
//! 4. Not the root word itself
//! 5. Minimum length (3 characters)
//!
//! The first failing check decides the rejection reason.

use super::dictionary::Dictionary;
use super::RootWord;
use std::fmt;

/// Minimum word length for valid submissions
pub const MIN_WORD_LENGTH: usize = 3;

/// Why a submission was not accepted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rejection {
    /// Nothing left after trimming
    EmptySubmission,
    /// Word was already accepted this round
    AlreadyUsed,
    /// Word needs letters the root word doesn't have (or not enough of them)
    NotASubsetOfRoot,
    /// Word not recognized by the dictionary
    NotARealWord,
    /// Word is the root word itself
    IsRootWord,
    /// Word is shorter than [`MIN_WORD_LENGTH`]
    TooShort,
}

impl Rejection {
    pub fn label(&self) -> &'static str {
        match self {
            Rejection::EmptySubmission => "Empty Submission",
            Rejection::AlreadyUsed => "Already Used",
            Rejection::NotASubsetOfRoot => "Not Possible",
            Rejection::NotARealWord => "Not A Real Word",
            Rejection::IsRootWord => "Is Root Word",
            Rejection::TooShort => "Too Short",
        }
    }

    /// Alert title shown to the player
    pub fn title(&self) -> &'static str {
        "Try again!"
    }

    /// Alert message shown to the player, quoting what they typed.
    pub fn message(&self, input: &str, root: &str) -> String {
        match self {
            Rejection::EmptySubmission => "Type a word first.".to_string(),
            Rejection::AlreadyUsed => format!("You've already entered '{}'.", input),
            Rejection::NotASubsetOfRoot => format!("You can't make '{}' using '{}'.", input, root),
            Rejection::NotARealWord => format!("'{}' isn't a real word!", input),
            Rejection::IsRootWord => "You're not wrong, but you get no points!".to_string(),
            Rejection::TooShort => format!(
                "Enter a word that's at least {} letters long.",
                MIN_WORD_LENGTH
            ),
        }
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Result of running the validation chain
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationOutcome {
    Accepted,
    Rejected(Rejection),
}

impl ValidationOutcome {
    #[cfg(test)]
    pub fn is_accepted(&self) -> bool {
        matches!(self, ValidationOutcome::Accepted)
    }
}

/// Runs the validation chain against an injected dictionary.
pub struct Validator<'d> {
    dictionary: &'d dyn Dictionary,
    locale: String,
}

impl<'d> Validator<'d> {
    /// Create a validator that asks `dictionary` about words in `locale`.
    pub fn new(dictionary: &'d dyn Dictionary, locale: impl Into<String>) -> Self {
        Self {
            dictionary,
            locale: locale.into(),
        }
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// Classify `candidate` against the root and the words accepted so far.
    ///
    /// `candidate` is expected to be normalized already. Pure apart from the
    /// dictionary lookup, which is required to be deterministic.
    pub fn validate(&self, root: &RootWord, history: &[String], candidate: &str) -> ValidationOutcome {
        let rejection = if !is_original(candidate, history) {
            Rejection::AlreadyUsed
        } else if !is_possible(candidate, root.as_str()) {
            Rejection::NotASubsetOfRoot
        } else if !self.dictionary.is_recognized_word(candidate, &self.locale) {
            Rejection::NotARealWord
        } else if candidate == root.as_str() {
            Rejection::IsRootWord
        } else if candidate.chars().count() < MIN_WORD_LENGTH {
            Rejection::TooShort
        } else {
            return ValidationOutcome::Accepted;
        };

        ValidationOutcome::Rejected(rejection)
    }
}

/// True if `candidate` has not been accepted before (case-insensitive)
fn is_original(candidate: &str, history: &[String]) -> bool {
    let candidate = candidate.to_lowercase();
    !history.iter().any(|used| used.to_lowercase() == candidate)
}

/// True if every letter of `candidate` can be taken from a distinct,
/// not-yet-used letter of `root`
fn is_possible(candidate: &str, root: &str) -> bool {
    let mut available: Vec<char> = root.chars().collect();

    for c in candidate.chars() {
        match available.iter().position(|&r| r == c) {
            Some(pos) => {
                available.swap_remove(pos);
            }
            None => return false,
        }
    }

    true
}
