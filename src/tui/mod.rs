//! Terminal UI components using ratatui

mod terminal;
mod ui;

pub use terminal::Tui;
pub use ui::render;

use crate::app::App;
use crate::game::RootWords;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use rand::Rng;
use std::io;
use tracing::warn;

/// What a key press asks the event loop to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    Quit,
    Submit,
    Backspace,
    Restart,
    Type(char),
}

fn action_for(key: KeyEvent) -> Option<Action> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    match key.code {
        KeyCode::Esc => Some(Action::Quit),
        KeyCode::Char('c') if ctrl => Some(Action::Quit),
        KeyCode::Char('r') if ctrl => Some(Action::Restart),
        KeyCode::Enter => Some(Action::Submit),
        KeyCode::Backspace => Some(Action::Backspace),
        KeyCode::Char(c) if !ctrl => Some(Action::Type(c)),
        _ => None,
    }
}

/// Run the game until the player quits.
///
/// Restarts draw a new root word from `roots` using `rng`.
pub fn run<R: Rng>(app: &mut App<'_>, roots: &RootWords, rng: &mut R) -> io::Result<()> {
    let mut terminal = Tui::start()?;

    while !app.should_quit {
        terminal.draw(|frame| render(frame, app))?;

        let Event::Key(key) = event::read()? else {
            continue;
        };

        match action_for(key) {
            Some(Action::Quit) => app.quit(),
            Some(Action::Submit) => {
                app.on_submit();
            }
            Some(Action::Backspace) => app.on_backspace(),
            Some(Action::Restart) => {
                let root = roots.choose(rng);
                if let Err(e) = app.restart(root) {
                    warn!(error = %e, "skipping restart");
                }
            }
            Some(Action::Type(c)) => app.on_char(c),
            None => {}
        }
    }

    Ok(())
}
