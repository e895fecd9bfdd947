use std::time::Duration;

use reqwest::Client;

use crate::{error::Result, source::PlaylistSource, types::PlaylistSet};

/// Playlist feed served over HTTP(S) as a single JSON object.
pub struct HttpPlaylistSource {
    client: Client,
    url: String,
}

impl HttpPlaylistSource {
    /// Creates a source for `url` whose requests give up after `timeout`.
    ///
    /// The timeout covers the whole request, from connecting until the body
    /// is read, so a server that accepts the connection and never answers
    /// still fails the attempt and lets the retry loop move on.
    ///
    /// # Errors
    ///
    /// Returns [`PlaylistError::Fetch`](crate::error::PlaylistError::Fetch)
    /// if the HTTP client cannot be built (e.g. the TLS backend fails to
    /// initialize).
    ///
    /// # Example
    ///
    /// ```
    /// let source = HttpPlaylistSource::new("https://example.com/feed.json", Duration::from_secs(30))?;
    /// let playlists = fetch_with_retry(&source, 3, Duration::from_secs(5)).await?;
    /// ```
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            url: url.into(),
        })
    }

    /// The feed URL requests are sent to.
    pub fn url(&self) -> &str {
        &self.url
    }
}

impl PlaylistSource for HttpPlaylistSource {
    /// Retrieves the playlist feed with a single request.
    ///
    /// Non-success statuses are turned into errors before the body is read,
    /// so a 404 page or a proxy error never reaches the JSON decoder.
    async fn fetch_playlists(&self) -> Result<PlaylistSet> {
        let response = self.client.get(&self.url).send().await?;
        let body = response.error_for_status()?.text().await?;
        let playlists = serde_json::from_str::<PlaylistSet>(&body)?;

        Ok(playlists)
    }
}
