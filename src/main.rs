//! WordScramble - make as many words as you can from one root word
//!
//! Type a word, press Enter. Longer words and more of them score higher.

mod app;
mod check;
mod cli;
mod config;
mod error;
mod game;
mod logging;
mod tui;

use anyhow::{Context, Result};
use app::App;
use clap::Parser;
use cli::{Cli, Command};
use config::Settings;
use game::{GameState, RootWords, Validator, WordList, DEFAULT_LOCALE};
use logging::LogTarget;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::borrow::Cow;
use tracing::{debug, info, warn};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut settings = Settings::load(cli.config.as_deref()).context("loading settings")?;
    cli.apply_to(&mut settings);

    let level = logging::level_for_verbosity(&settings.log_level, cli.verbose);
    let command = cli.command();
    let owns_terminal = matches!(command, Command::Play { .. });
    let target = LogTarget::for_command(owns_terminal, settings.resolved_log_file());
    logging::init_logging(&level, &target).context("initializing logging")?;
    debug!(?settings, "settings loaded");

    let dictionary = load_dictionary(&settings)?;
    let validator = Validator::new(&*dictionary, settings.locale.clone());

    match command {
        Command::Play { root, seed } => {
            let roots = match &settings.roots {
                Some(path) => RootWords::from_file(path)?,
                None => RootWords::embedded(),
            };
            if roots.is_empty() {
                warn!("root word list is empty; every round uses the fallback root");
            }
            run_play(validator, &roots, root, seed)
        }
        Command::Check { root, words } => {
            let stdout = std::io::stdout();
            check::run_check(&mut stdout.lock(), &root, &words, &validator)?;
            Ok(())
        }
    }
}

/// The configured word list, or the shared embedded English one
fn load_dictionary(settings: &Settings) -> Result<Cow<'static, WordList>> {
    let dictionary = match &settings.dictionary {
        Some(path) => Cow::Owned(WordList::from_file(settings.locale.clone(), path)?),
        None => {
            if !settings.locale.eq_ignore_ascii_case(DEFAULT_LOCALE) {
                warn!(
                    locale = %settings.locale,
                    "no dictionary configured for this locale; every word will be rejected"
                );
            }
            Cow::Borrowed(WordList::english())
        }
    };

    if dictionary.is_empty() {
        warn!(locale = dictionary.locale(), "dictionary is empty; every word will be rejected");
    } else {
        info!(locale = dictionary.locale(), words = dictionary.len(), "dictionary ready");
    }
    Ok(dictionary)
}

fn run_play(
    validator: Validator<'_>,
    roots: &RootWords,
    root: Option<String>,
    seed: Option<u64>,
) -> Result<()> {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let root = root.unwrap_or_else(|| roots.choose(&mut rng).to_string());
    let game = GameState::start(&root)?;
    info!(roots = roots.len(), "starting terminal game");

    let mut app = App::new(game, validator);
    tui::run(&mut app, roots, &mut rng)?;

    info!(
        rounds = app.round(),
        words = app.game().word_count(),
        score = app.game().score(),
        "game over"
    );
    Ok(())
}
