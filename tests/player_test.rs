use chrono::NaiveDate;
use dailyshuffle::config::Config;
use dailyshuffle::error::PlaylistError;
use dailyshuffle::player::*;
use dailyshuffle::types::PlaylistSet;
use rand::{SeedableRng, rngs::StdRng};
use std::time::Duration;

// Helper function to build a config without delays
fn test_config() -> Config {
    Config::from_lookup(|key| match key {
        "PLAYLISTS_URL" => Some("http://127.0.0.1:9/playlists.json".to_string()),
        "RETRY_DELAY_SECS" | "TRACK_DELAY_SECS" => Some("0".to_string()),
        "MAX_RETRIES" => Some("2".to_string()),
        _ => None,
    })
    .unwrap()
}

fn feed() -> PlaylistSet {
    let mut feed = PlaylistSet::new();
    feed.insert("20210701", vec!["aa".into(), "bb".into(), "cc".into()]);
    feed.insert("20210702", vec!["dd".into(), "ff".into(), "cc".into()]);
    feed
}

fn printed_lines(out: Vec<u8>) -> Vec<String> {
    String::from_utf8(out)
        .unwrap()
        .lines()
        .map(|l| l.to_string())
        .collect()
}

#[tokio::test]
async fn test_play_tracks_output() {
    let mut out: Vec<u8> = Vec::new();
    play_tracks(
        &["first".to_string(), "second".to_string()],
        Duration::ZERO,
        &mut out,
    )
    .await
    .unwrap();

    assert_eq!(
        printed_lines(out),
        vec!["Now playing -> first", "Now playing -> second"]
    );
}

#[tokio::test]
async fn test_play_tracks_empty() {
    let mut out: Vec<u8> = Vec::new();
    play_tracks(&[], Duration::ZERO, &mut out).await.unwrap();
    assert!(out.is_empty());
}

#[tokio::test]
async fn test_play_daily_playlist_plays_latest_list_shuffled() {
    let config = test_config();
    let now = NaiveDate::from_ymd_opt(2021, 7, 10)
        .unwrap()
        .and_hms_opt(8, 30, 0)
        .unwrap();
    let mut rng = StdRng::seed_from_u64(3);
    let mut out: Vec<u8> = Vec::new();

    let played = play_daily_playlist(&config, &feed(), now, &mut rng, &mut out)
        .await
        .unwrap();
    assert_eq!(played, 3);

    let mut lines = printed_lines(out);
    assert!(lines.iter().all(|l| l.starts_with(NOW_PLAYING)));
    lines.sort();
    assert_eq!(
        lines,
        vec![
            "Now playing -> cc",
            "Now playing -> dd",
            "Now playing -> ff"
        ]
    );
}

#[tokio::test]
async fn test_play_daily_playlist_propagates_resolve_errors() {
    let config = test_config();
    let now = NaiveDate::from_ymd_opt(2021, 6, 1)
        .unwrap()
        .and_hms_opt(8, 30, 0)
        .unwrap();
    let mut rng = StdRng::seed_from_u64(3);
    let mut out: Vec<u8> = Vec::new();

    let result = play_daily_playlist(&config, &feed(), now, &mut rng, &mut out).await;
    assert!(matches!(result, Err(PlaylistError::NoEligibleDate(_))));
    assert!(out.is_empty());

    let result =
        play_daily_playlist(&config, &PlaylistSet::new(), now, &mut rng, &mut out).await;
    assert!(matches!(result, Err(PlaylistError::EmptyCollection)));
}

#[tokio::test]
async fn test_run_keeps_going_after_failures() {
    let config = test_config();
    let mut rng = StdRng::seed_from_u64(3);
    let mut out: Vec<u8> = Vec::new();

    // Every cycle fails on the empty feed, the loop still runs all of them
    let summary = run(&config, &PlaylistSet::new(), &mut rng, &mut out, Some(3)).await;
    assert_eq!(
        summary,
        RunSummary {
            cycles: 3,
            failed: 3,
            tracks_played: 0
        }
    );
}

#[tokio::test]
async fn test_run_plays_every_cycle() {
    let config = test_config();
    let mut rng = StdRng::seed_from_u64(3);
    let mut out: Vec<u8> = Vec::new();

    // Both keys lie in the past relative to the real clock
    let summary = run(&config, &feed(), &mut rng, &mut out, Some(2)).await;
    assert_eq!(summary.cycles, 2);
    assert_eq!(summary.failed, 0);
    assert_eq!(summary.tracks_played, 6);
    assert_eq!(printed_lines(out).len(), 6);
}

#[tokio::test]
async fn test_run_zero_cycles() {
    let config = test_config();
    let mut rng = StdRng::seed_from_u64(3);
    let mut out: Vec<u8> = Vec::new();

    let summary = run(&config, &feed(), &mut rng, &mut out, Some(0)).await;
    assert_eq!(summary, RunSummary::default());
}
