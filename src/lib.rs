//! Daily Shuffle Player Library
//!
//! This library picks the playlist of the day from a date-keyed feed and plays
//! it back in random order. The feed maps date keys (`YYYYMMDD` by default) to
//! lists of track names; the playlist for today is used when present,
//! otherwise the one with the latest date that is not in the future.
//!
//! # Modules
//!
//! - `cli` - Command-line interface implementations
//! - `config` - Configuration management and environment variables
//! - `error` - Error type shared by every operation
//! - `logging` - Log file setup for the binary
//! - `player` - Play cycles and the endless playback loop
//! - `playlist` - Playlist resolution and shuffling
//! - `source` - Playlist feed sources and fetch retry
//! - `types` - Data structures and type definitions
//! - `utils` - Date key helpers

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod player;
pub mod playlist;
pub mod source;
pub mod types;
pub mod utils;

/// Prints an informational message with a blue bullet point.
///
/// Used for general information and status updates on the console. Log
/// file output goes through the `log` facade instead.
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Terminates with exit code 1 right after printing, so it is only meant for
/// unrecoverable errors in the command layer.
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
