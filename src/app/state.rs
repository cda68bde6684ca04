//! Application state management

use crate::error::GameError;
use crate::game::{GameState, Rejection, SubmitResult, Validator};
use tracing::{debug, info};

/// An alert shown after a rejected submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub title: String,
    pub message: String,
}

impl Alert {
    /// Build the alert for a rejection, quoting the player's raw input.
    pub fn for_rejection(reason: Rejection, input: &str, root: &str) -> Self {
        Self {
            title: reason.title().to_string(),
            message: reason.message(input, root),
        }
    }
}

/// Main application state
pub struct App<'d> {
    /// Whether the application should quit
    pub should_quit: bool,
    /// Current user input
    pub input: String,
    /// Alert from the last rejected submission, if not yet dismissed
    pub alert: Option<Alert>,
    game: GameState,
    validator: Validator<'d>,
    /// Rounds played, starting at 1
    round: u32,
}

impl<'d> App<'d> {
    /// Create a new application instance around a freshly started game
    pub fn new(game: GameState, validator: Validator<'d>) -> Self {
        info!(root = %game.root(), locale = validator.locale(), "round started");
        Self {
            should_quit: false,
            input: String::new(),
            alert: None,
            game,
            validator,
            round: 1,
        }
    }

    /// Signal the application to quit
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn game(&self) -> &GameState {
        &self.game
    }

    pub fn round(&self) -> u32 {
        self.round
    }

    /// Handle character input. Typing dismisses an open alert first.
    pub fn on_char(&mut self, c: char) {
        if c.is_control() {
            return;
        }
        self.dismiss_alert();
        self.input.push(c);
    }

    /// Handle backspace
    pub fn on_backspace(&mut self) {
        if self.alert.is_some() {
            self.dismiss_alert();
            return;
        }
        self.input.pop();
    }

    /// Close the alert and clear the rejected input
    pub fn dismiss_alert(&mut self) {
        if self.alert.take().is_some() {
            self.input.clear();
        }
    }

    /// Handle word submission (Enter key).
    ///
    /// With an alert open, Enter only dismisses it. Empty input is ignored.
    /// Returns the submission result when a submission was made.
    pub fn on_submit(&mut self) -> Option<SubmitResult> {
        if self.alert.is_some() {
            self.dismiss_alert();
            return None;
        }

        let result = self.game.submit(&self.input, &self.validator);

        match &result {
            SubmitResult::Accepted { word, score } => {
                debug!(word = %word, score, words = self.game.word_count(), "word accepted");
                self.input.clear();
            }
            SubmitResult::Rejected(Rejection::EmptySubmission) => {
                self.input.clear();
                return None;
            }
            SubmitResult::Rejected(reason) => {
                debug!(input = %self.input, reason = reason.label(), "word rejected");
                self.alert = Some(Alert::for_rejection(
                    *reason,
                    &self.input,
                    self.game.root().as_str(),
                ));
            }
        }

        Some(result)
    }

    /// Start a new round on `root`, discarding the current one.
    ///
    /// On an invalid root the current round is kept.
    pub fn restart(&mut self, root: &str) -> Result<(), GameError> {
        let game = self.game.reset(root)?;
        info!(
            previous_root = %self.game.root(),
            previous_score = self.game.score(),
            root = %game.root(),
            "round restarted"
        );
        self.game = game;
        self.round += 1;
        self.input.clear();
        self.alert = None;
        Ok(())
    }
}
