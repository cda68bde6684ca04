//! Non-interactive play: submit a list of words and report each outcome

use crate::error::GameError;
use crate::game::{GameState, SubmitResult, Validator};
use std::io::{self, Write};
use tracing::info;

/// Errors from the `check` command
#[derive(Debug, thiserror::Error)]
pub enum CheckError {
    #[error(transparent)]
    Game(#[from] GameError),
    #[error("failed to write report: {0}")]
    Io(#[from] io::Error),
}

/// Play `words` in order against a fresh game on `root`, writing one line
/// per word and the final score. Returns the final game state.
pub fn run_check<W: Write>(
    out: &mut W,
    root: &str,
    words: &[String],
    validator: &Validator<'_>,
) -> Result<GameState, CheckError> {
    let mut game = GameState::start(root)?;
    info!(root = %game.root(), words = words.len(), "checking words");

    for raw in words {
        match game.submit(raw, validator) {
            SubmitResult::Accepted { word, score } => {
                writeln!(out, "accepted {} (score {:.3})", word, score)?;
            }
            SubmitResult::Rejected(reason) => {
                writeln!(out, "rejected {}: {}", raw, reason.label())?;
            }
        }
    }

    writeln!(
        out,
        "{} words, {} letters, final score {:.3}",
        game.word_count(),
        game.letter_count(),
        game.score()
    )?;

    Ok(game)
}
