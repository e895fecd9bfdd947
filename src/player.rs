use std::{io::Write, time::Duration};

use chrono::{Local, NaiveDateTime};
use rand::Rng;
use tokio::time::sleep;

use crate::{
    config::Config,
    error::Result,
    playlist,
    source::{PlaylistSource, fetch_with_retry},
};

pub const NOW_PLAYING: &str = "Now playing -> ";

/// Outcome of a bounded [`run`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub cycles: u64,
    pub failed: u64,
    pub tracks_played: u64,
}

/// Prints every track on its own line, pausing `delay` after each one.
pub async fn play_tracks<W: Write>(tracks: &[String], delay: Duration, out: &mut W) -> Result<()> {
    for track in tracks {
        writeln!(out, "{}{}", NOW_PLAYING, track)?;
        out.flush()?;
        sleep(delay).await;
    }

    Ok(())
}

/// One play cycle: fetch, pick the playlist for `now`, shuffle, play.
///
/// Returns the number of tracks played.
pub async fn play_daily_playlist<S, R, W>(
    config: &Config,
    source: &S,
    now: NaiveDateTime,
    rng: &mut R,
    out: &mut W,
) -> Result<usize>
where
    S: PlaylistSource,
    R: Rng + ?Sized,
    W: Write,
{
    let playlists = fetch_with_retry(source, config.max_retries, config.retry_delay).await?;
    let tracks = playlist::resolve(&playlists, now, &config.date_format)?;
    let shuffled = playlist::shuffle(tracks, rng);

    play_tracks(&shuffled, config.track_delay, out).await?;
    Ok(shuffled.len())
}

/// Plays cycle after cycle against the local clock.
///
/// A failing cycle is logged and the next one starts right away. With
/// `max_cycles` set to `None` this never returns.
pub async fn run<S, R, W>(
    config: &Config,
    source: &S,
    rng: &mut R,
    out: &mut W,
    max_cycles: Option<u64>,
) -> RunSummary
where
    S: PlaylistSource,
    R: Rng + ?Sized,
    W: Write,
{
    let mut summary = RunSummary::default();

    while max_cycles.is_none_or(|max| summary.cycles < max) {
        let now = Local::now().naive_local();
        match play_daily_playlist(config, source, now, rng, out).await {
            Ok(played) => {
                summary.tracks_played += played as u64;
                log::debug!("play cycle finished after {} track(s)", played);
            }
            Err(e) => {
                summary.failed += 1;
                log::error!("{}", e);
            }
        }
        summary.cycles += 1;
    }

    summary
}
