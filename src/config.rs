//! Configuration management for dailyshuffle.
//!
//! Values come from environment variables. Before reading them the binary
//! calls [`load_env`], which merges a `.env` file from the local data
//! directory into the process environment:
//!
//! - Linux: `~/.local/share/dailyshuffle/.env`
//! - macOS: `~/Library/Application Support/dailyshuffle/.env`
//! - Windows: `%LOCALAPPDATA%/dailyshuffle/.env`
//!
//! Variables already set in the environment win over the file. Everything
//! except `PLAYLISTS_URL` has a default.

use std::{env, path::PathBuf, time::Duration};

use log::LevelFilter;

use crate::{
    error::{PlaylistError, Result},
    utils,
};

pub const APP_DIR: &str = "dailyshuffle";
pub const DEFAULT_MAX_RETRIES: u32 = 3;
pub const DEFAULT_RETRY_DELAY_SECS: u64 = 5;
pub const DEFAULT_TRACK_DELAY_SECS: u64 = 1;
pub const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_LOG_FORMAT: &str = "{time} - {level} - {message}";

/// Loads environment variables from the `.env` file in the local data directory.
///
/// Creates the directory if needed. A missing `.env` file is not an error;
/// a file that exists but cannot be parsed is.
pub async fn load_env() -> Result<()> {
    let path = app_dir().join(".env");
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent).await?;
    }

    if path.is_file() {
        dotenv::from_path(&path)
            .map_err(|e| PlaylistError::Config(format!("{}: {}", path.display(), e)))?;
    }

    Ok(())
}

/// Returns the platform-specific data directory of the application.
///
/// Falls back to `./dailyshuffle` when the platform has no local data
/// directory.
///
/// # Example
///
/// ```
/// let env_file = app_dir().join(".env"); // e.g. "~/.local/share/dailyshuffle/.env"
/// ```
pub fn app_dir() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push(APP_DIR);
    path
}

/// Runtime settings shared by every command.
#[derive(Debug, Clone)]
pub struct Config {
    /// Endpoint serving the date-keyed playlist feed (`PLAYLISTS_URL`)
    pub playlists_url: String,
    /// chrono format of the feed's keys (`DATE_FORMAT`)
    pub date_format: String,
    /// Fetch attempts per play cycle (`MAX_RETRIES`)
    pub max_retries: u32,
    /// Pause between fetch attempts (`RETRY_DELAY_SECS`)
    pub retry_delay: Duration,
    /// Pause after each printed track (`TRACK_DELAY_SECS`)
    pub track_delay: Duration,
    /// Upper bound for a single feed request (`FETCH_TIMEOUT_SECS`)
    pub fetch_timeout: Duration,
    /// File the log lines are appended to (`LOG_FILE`)
    pub log_file: PathBuf,
    /// Log line template with `{time}`, `{level}`, `{target}` and `{message}` (`LOG_FORMAT`)
    pub log_format: String,
    /// Minimum level written for this crate (`LOG_LEVEL`)
    pub log_level: LevelFilter,
}

impl Config {
    /// Reads the configuration from the process environment.
    ///
    /// `url_override` (the `--url` flag) takes precedence over
    /// `PLAYLISTS_URL`, which then does not need to be set at all.
    ///
    /// # Errors
    ///
    /// Returns [`PlaylistError::Config`] if no feed URL is available or any
    /// variable holds a value that does not parse.
    ///
    /// # Example
    ///
    /// ```
    /// config::load_env().await?;
    /// let config = Config::from_env(None)?;
    /// println!("{}", config.playlists_url);
    /// ```
    pub fn from_env(url_override: Option<String>) -> Result<Self> {
        Self::from_lookup(|key| match key {
            "PLAYLISTS_URL" => url_override.clone().or_else(|| env::var(key).ok()),
            _ => env::var(key).ok(),
        })
    }

    /// Builds the configuration from an arbitrary key lookup.
    ///
    /// Blank values count as unset and fall back to their defaults.
    ///
    /// # Errors
    ///
    /// Same as [`Config::from_env`]; additionally `MAX_RETRIES` and
    /// `FETCH_TIMEOUT_SECS` must be at least 1.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let playlists_url = get("PLAYLISTS_URL")
            .ok_or_else(|| PlaylistError::Config("PLAYLISTS_URL must be set".into()))?;

        let date_format = get("DATE_FORMAT").unwrap_or_else(|| utils::DEFAULT_DATE_FORMAT.into());
        utils::validate_date_format(&date_format)?;

        let max_retries = parse_number("MAX_RETRIES", get("MAX_RETRIES"), DEFAULT_MAX_RETRIES)?;
        if max_retries == 0 {
            return Err(PlaylistError::Config(
                "MAX_RETRIES must be at least 1".into(),
            ));
        }

        let retry_delay = Duration::from_secs(parse_number(
            "RETRY_DELAY_SECS",
            get("RETRY_DELAY_SECS"),
            DEFAULT_RETRY_DELAY_SECS,
        )?);
        let track_delay = Duration::from_secs(parse_number(
            "TRACK_DELAY_SECS",
            get("TRACK_DELAY_SECS"),
            DEFAULT_TRACK_DELAY_SECS,
        )?);
        let fetch_timeout = parse_number(
            "FETCH_TIMEOUT_SECS",
            get("FETCH_TIMEOUT_SECS"),
            DEFAULT_FETCH_TIMEOUT_SECS,
        )?;
        if fetch_timeout == 0 {
            return Err(PlaylistError::Config(
                "FETCH_TIMEOUT_SECS must be at least 1".into(),
            ));
        }
        let fetch_timeout = Duration::from_secs(fetch_timeout);

        let log_file = get("LOG_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|| app_dir().join("dailyshuffle.log"));
        let log_format = get("LOG_FORMAT").unwrap_or_else(|| DEFAULT_LOG_FORMAT.into());
        let log_level = match get("LOG_LEVEL") {
            Some(level) => level.parse::<LevelFilter>().map_err(|_| {
                PlaylistError::Config(format!("LOG_LEVEL has invalid value '{}'", level))
            })?,
            None => LevelFilter::Debug,
        };

        Ok(Self {
            playlists_url,
            date_format,
            max_retries,
            retry_delay,
            track_delay,
            fetch_timeout,
            log_file,
            log_format,
            log_level,
        })
    }
}

fn parse_number<T: std::str::FromStr>(key: &str, value: Option<String>, default: T) -> Result<T> {
    match value {
        Some(raw) => raw.trim().parse::<T>().map_err(|_| {
            PlaylistError::Config(format!("{} must be a non-negative integer, got '{}'", key, raw))
        }),
        None => Ok(default),
    }
}
