use std::time::Duration;

use tokio::time::sleep;

use crate::{
    error::{PlaylistError, Result},
    source::PlaylistSource,
    types::PlaylistSet,
};

/// Fetches from `source`, trying up to `max_retries` times in total.
///
/// Every failed attempt is logged. Between attempts the loop sleeps for
/// `delay`; there is no sleep after the last one. When all attempts fail the
/// last error is reported inside [`PlaylistError::RetriesExhausted`].
pub async fn fetch_with_retry<S: PlaylistSource>(
    source: &S,
    max_retries: u32,
    delay: Duration,
) -> Result<PlaylistSet> {
    let max_retries = max_retries.max(1);
    let mut attempt = 1;

    loop {
        match source.fetch_playlists().await {
            Ok(playlists) => return Ok(playlists),
            Err(e) => {
                log::error!("playlists fetching failed, error: {}", e);

                if attempt >= max_retries {
                    log::error!("max retries of playlists fetching - connection refused");
                    return Err(PlaylistError::RetriesExhausted {
                        attempts: attempt,
                        last: e.to_string(),
                    });
                }

                attempt += 1;
                log::info!("trying to fetch playlists again (attempt #{})", attempt);
                sleep(delay).await;
            }
        }
    }
}
