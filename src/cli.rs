//! Command-line interface for scramble.

use crate::config::Settings;
use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// WordScramble - make as many words as you can from one root word
#[derive(Parser, Debug)]
#[command(name = "scramble")]
#[command(about = "Word-formation game in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Settings file (defaults to the platform config directory)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Dictionary locale
    #[arg(long, global = true)]
    pub locale: Option<String>,

    /// Word list to use as the dictionary instead of the embedded one
    #[arg(long, global = true)]
    pub dictionary: Option<PathBuf>,

    /// Word list to draw root words from instead of the embedded one
    #[arg(long, global = true)]
    pub roots: Option<PathBuf>,

    /// Log file for the terminal game
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    /// More logging (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play in the terminal
    Play {
        /// Root word for the first round (random if omitted)
        #[arg(long)]
        root: Option<String>,

        /// Seed for choosing root words
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Submit words to a fresh game and print each outcome
    Check {
        /// Root word to play on
        #[arg(long)]
        root: String,

        /// Words to submit, in order
        #[arg(required = true)]
        words: Vec<String>,
    },
}

impl Cli {
    /// The command to run, `play` when none was given
    pub fn command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Play {
            root: None,
            seed: None,
        })
    }

    /// Override file settings with flags given on the command line
    pub fn apply_to(&self, settings: &mut Settings) {
        if let Some(locale) = &self.locale {
            settings.locale = locale.clone();
        }
        if let Some(path) = &self.dictionary {
            settings.dictionary = Some(path.clone());
        }
        if let Some(path) = &self.roots {
            settings.roots = Some(path.clone());
        }
        if let Some(path) = &self.log_file {
            settings.log_file = Some(path.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_command_is_play() {
        let cli = Cli::try_parse_from(["scramble"]).unwrap();
        assert_eq!(
            cli.command(),
            Command::Play {
                root: None,
                seed: None
            }
        );
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_play_with_root_and_seed() {
        let cli = Cli::try_parse_from(["scramble", "play", "--root", "silkworm", "--seed", "7"])
            .unwrap();
        assert_eq!(
            cli.command(),
            Command::Play {
                root: Some("silkworm".to_string()),
                seed: Some(7)
            }
        );
    }

    #[test]
    fn test_check_requires_words() {
        assert!(Cli::try_parse_from(["scramble", "check", "--root", "scramble"]).is_err());

        let cli =
            Cli::try_parse_from(["scramble", "check", "--root", "scramble", "amble", "lamb"])
                .unwrap();
        assert_eq!(
            cli.command(),
            Command::Check {
                root: "scramble".to_string(),
                words: vec!["amble".to_string(), "lamb".to_string()]
            }
        );
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "scramble", "check", "--root", "scramble", "cab", "-vv", "--locale", "en-GB",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.locale.as_deref(), Some("en-GB"));
    }

    #[test]
    fn test_apply_to_overrides_settings() {
        let cli = Cli::try_parse_from([
            "scramble",
            "--locale",
            "fr",
            "--dictionary",
            "/tmp/mots.txt",
        ])
        .unwrap();
        let mut settings = Settings {
            roots: Some(PathBuf::from("/tmp/roots.txt")),
            ..Default::default()
        };

        cli.apply_to(&mut settings);

        assert_eq!(settings.locale, "fr");
        assert_eq!(settings.dictionary, Some(PathBuf::from("/tmp/mots.txt")));
        assert_eq!(settings.roots, Some(PathBuf::from("/tmp/roots.txt")));
        assert!(settings.log_file.is_none());
    }
}
