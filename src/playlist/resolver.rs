use chrono::{NaiveDate, NaiveDateTime};

use crate::{
    error::{PlaylistError, Result},
    types::{KeyStatus, PlaylistSet, TrackList},
    utils,
};

/// Picks the track list that applies at `now`.
///
/// An exact match for today's key wins. Otherwise the key with the latest
/// date on or before `now` is used; keys that do not parse are skipped and
/// logged. Fails with [`PlaylistError::EmptyCollection`] for an empty set and
/// [`PlaylistError::NoEligibleDate`] when every parseable key lies in the
/// future.
pub fn resolve<'a>(
    playlists: &'a PlaylistSet,
    now: NaiveDateTime,
    date_format: &str,
) -> Result<&'a TrackList> {
    if playlists.is_empty() {
        return Err(PlaylistError::EmptyCollection);
    }

    let today = utils::format_date_key(now.date(), date_format)?;
    if let Some(tracks) = playlists.get(&today) {
        return Ok(tracks);
    }

    log::info!("there is no playlist today");
    let latest = latest_date_key(playlists, now, date_format)?;
    playlists
        .get(&latest)
        .ok_or(PlaylistError::NoEligibleDate(today))
}

/// Returns the original key of the latest date on or before `now`.
pub fn latest_date_key(
    playlists: &PlaylistSet,
    now: NaiveDateTime,
    date_format: &str,
) -> Result<String> {
    if playlists.is_empty() {
        return Err(PlaylistError::EmptyCollection);
    }

    let reference = now.date();
    dated_keys(playlists, date_format)
        .into_iter()
        .filter(|(_, date)| *date <= reference)
        .max_by_key(|(_, date)| *date)
        .map(|(key, _)| key.to_string())
        .ok_or_else(|| PlaylistError::NoEligibleDate(reference.to_string()))
}

/// Dates of every key that parses, in key order.
pub fn parse_playlist_dates(playlists: &PlaylistSet, date_format: &str) -> Vec<NaiveDate> {
    dated_keys(playlists, date_format)
        .into_iter()
        .map(|(_, date)| date)
        .collect()
}

/// Tags every key with how it relates to `now`, in key order.
pub fn classify(
    playlists: &PlaylistSet,
    now: NaiveDateTime,
    date_format: &str,
) -> Result<Vec<(String, usize, KeyStatus)>> {
    let today = utils::format_date_key(now.date(), date_format)?;
    let reference = now.date();

    let parsed: Vec<(&String, usize, Option<NaiveDate>)> = playlists
        .iter()
        .map(|(key, tracks)| {
            (
                key,
                tracks.len(),
                utils::parse_date_key(key, date_format).ok(),
            )
        })
        .collect();

    let fallback = if playlists.get(&today).is_some() {
        None
    } else {
        parsed
            .iter()
            .filter_map(|(key, _, date)| date.map(|d| (*key, d)))
            .filter(|(_, date)| *date <= reference)
            .max_by_key(|(_, date)| *date)
            .map(|(key, _)| key.clone())
    };

    Ok(parsed
        .into_iter()
        .map(|(key, count, date)| {
            let status = match date {
                None => KeyStatus::Invalid,
                Some(_) if *key == today => KeyStatus::Today,
                Some(_) if fallback.as_ref() == Some(key) => KeyStatus::Latest,
                Some(d) if d > reference => KeyStatus::Upcoming,
                Some(_) => KeyStatus::Past,
            };
            (key.clone(), count, status)
        })
        .collect())
}

fn dated_keys<'a>(playlists: &'a PlaylistSet, date_format: &str) -> Vec<(&'a str, NaiveDate)> {
    playlists
        .keys()
        .filter_map(|key| match utils::parse_date_key(key, date_format) {
            Ok(date) => Some((key.as_str(), date)),
            Err(e) => {
                log::error!("{}", e);
                None
            }
        })
        .collect()
}
