use crate::{config::Config, error, info, player::NOW_PLAYING, playlist, success, utils};

use super::fetch;

/// Resolves the playlist for today (or `--date`) and prints it once.
pub async fn today(config: Config, date: Option<String>, seed: Option<u64>, no_shuffle: bool) {
    let now = fetch::reference_instant(&config, date);

    let playlists = match fetch::fetch_playlists(&config).await {
        Ok(playlists) => playlists,
        Err(e) => error!("Cannot fetch playlists. Err: {}", e),
    };

    let tracks = match playlist::resolve(&playlists, now, &config.date_format) {
        Ok(tracks) => tracks,
        Err(e) => error!("Cannot resolve a playlist for {}. Err: {}", now.date(), e),
    };

    let key = utils::format_date_key(now.date(), &config.date_format).unwrap_or_default();
    if playlists.get(&key).is_none() {
        info!("There is no playlist for {}, using the latest one", now.date());
    }

    let order = if no_shuffle {
        tracks.clone()
    } else {
        let mut rng = playlist::rng_from_seed(seed);
        playlist::shuffle(tracks, &mut rng)
    };

    for track in &order {
        println!("{}{}", NOW_PLAYING, track);
    }

    success!("{} track(s) in today's playlist", order.len());
}
