use std::io;

use crate::{
    config::Config, error, info, player, playlist, source::HttpPlaylistSource, success, warning,
};

/// Plays the daily playlist in a loop, forever unless `cycles` is given.
pub async fn play(config: Config, cycles: Option<u64>, seed: Option<u64>) {
    let source = match HttpPlaylistSource::new(&config.playlists_url, config.fetch_timeout) {
        Ok(source) => source,
        Err(e) => error!("Cannot create HTTP client. Err: {}", e),
    };
    let mut rng = playlist::rng_from_seed(seed);
    let mut stdout = io::stdout();

    info!(
        "Playing daily playlists from {} (log: {})",
        source.url(),
        config.log_file.display()
    );

    let summary = player::run(&config, &source, &mut rng, &mut stdout, cycles).await;

    if summary.failed > 0 {
        warning!(
            "{} of {} cycle(s) failed, see {}",
            summary.failed,
            summary.cycles,
            config.log_file.display()
        );
    }

    success!(
        "Played {} track(s) in {} cycle(s)",
        summary.tracks_played,
        summary.cycles
    );
}
