//! # Playlist Sources
//!
//! Where the date-keyed playlist feed comes from. The player only needs a
//! [`PlaylistSource`]; the production implementation is [`HttpPlaylistSource`],
//! which performs a single `GET` against the configured URL and decodes the
//! JSON object body into a [`PlaylistSet`].
//!
//! Fetching is never retried by a source itself. [`fetch_with_retry`] wraps any
//! source in a bounded loop with a fixed delay between attempts and turns the
//! final failure into [`PlaylistError::RetriesExhausted`](crate::error::PlaylistError).
//!
//! ## Feed Format
//!
//! ```text
//! {
//!     "20210701": ["track a", "track b", "track c"],
//!     "20210702": ["track d", "track f", "track c"]
//! }
//! ```

mod http;
mod retry;

use crate::{error::Result, types::PlaylistSet};

pub use http::HttpPlaylistSource;
pub use retry::fetch_with_retry;

/// Anything that can produce a fresh playlist set on demand.
#[allow(async_fn_in_trait)]
pub trait PlaylistSource {
    async fn fetch_playlists(&self) -> Result<PlaylistSet>;
}

/// A fixed, in-memory feed.
impl PlaylistSource for PlaylistSet {
    async fn fetch_playlists(&self) -> Result<PlaylistSet> {
        Ok(self.clone())
    }
}
