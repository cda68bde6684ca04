//! Logging setup using `tracing` and `tracing-subscriber`.
//!
//! The terminal game owns the screen, so it logs to a file, or not at all
//! when no log file can be resolved. The `check` command logs to stderr.
//! `RUST_LOG` always wins over the configured level.

use std::fs::OpenOptions;
use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// Where log output goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    Stderr,
    File(PathBuf),
    /// No subscriber is installed
    Disabled,
}

impl LogTarget {
    /// Target for a command. Anything drawing to the terminal must not log
    /// to stderr, so it gets `log_file` or nothing.
    pub fn for_command(owns_terminal: bool, log_file: Option<PathBuf>) -> Self {
        match (owns_terminal, log_file) {
            (true, Some(path)) => LogTarget::File(path),
            (true, None) => LogTarget::Disabled,
            (false, _) => LogTarget::Stderr,
        }
    }
}

/// Pick the filter for a `-v` count: 0 keeps `base`, 1 is debug, 2+ is trace.
pub fn level_for_verbosity(base: &str, verbosity: u8) -> String {
    match verbosity {
        0 => base.to_string(),
        1 => "debug".to_string(),
        _ => "trace".to_string(),
    }
}

/// Initialize the global tracing subscriber.
///
/// Does nothing if a subscriber is already installed.
pub fn init_logging(level: &str, target: &LogTarget) -> io::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    match target {
        LogTarget::Stderr => {
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(io::stderr)
                .with_target(false)
                .without_time()
                .try_init();
        }
        LogTarget::File(path) => {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(Arc::new(file))
                .with_ansi(false)
                .try_init();
        }
        LogTarget::Disabled => {}
    }

    Ok(())
}
