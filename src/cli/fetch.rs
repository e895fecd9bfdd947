use std::time::Duration;

use chrono::{Local, NaiveDateTime};
use indicatif::{ProgressBar, ProgressStyle};

use crate::{
    config::Config,
    error::Result,
    source::{HttpPlaylistSource, fetch_with_retry},
    types::PlaylistSet,
    utils, warning,
};

/// Fetches the feed with retry while showing a spinner.
pub(super) async fn fetch_playlists(config: &Config) -> Result<PlaylistSet> {
    let source = HttpPlaylistSource::new(&config.playlists_url, config.fetch_timeout)?;

    let pb = ProgressBar::new_spinner();
    pb.set_message(format!("Fetching playlists from {}...", source.url()));
    pb.enable_steady_tick(Duration::from_millis(100));
    if let Ok(style) = ProgressStyle::with_template("{spinner:.blue} {msg}") {
        pb.set_style(style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"));
    }

    let result = fetch_with_retry(&source, config.max_retries, config.retry_delay).await;
    pb.finish_and_clear();
    result
}

/// Reference instant for `--date`, falling back to now on a bad value.
pub(super) fn reference_instant(config: &Config, date: Option<String>) -> NaiveDateTime {
    match utils::get_reference_instant(date.as_deref(), &config.date_format) {
        Ok(now) => now,
        Err(e) => {
            warning!("{}. Using the current date instead.", e);
            Local::now().naive_local()
        }
    }
}
