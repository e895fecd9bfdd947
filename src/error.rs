use thiserror::Error;

/// Everything that can go wrong between fetching the playlist feed and
/// printing the last track of a cycle.
#[derive(Debug, Error)]
pub enum PlaylistError {
    /// Network or HTTP status failure of a single fetch attempt
    #[error("playlists fetch failed: {0}")]
    Fetch(#[from] reqwest::Error),

    /// The feed answered, but not with a date-keyed object of track lists
    #[error("malformed playlists feed: {0}")]
    Decode(#[from] serde_json::Error),

    /// Every fetch attempt failed; there is no data for this cycle
    #[error("no playlists available after {attempts} attempt(s), last error: {last}")]
    RetriesExhausted { attempts: u32, last: String },

    /// A single date key does not parse under the configured format
    #[error("invalid date key '{key}': {reason}")]
    DateParse { key: String, reason: String },

    /// Resolution was asked to pick from an empty playlist set
    #[error("received an empty playlist collection")]
    EmptyCollection,

    /// No parseable key lies on or before the reference date
    #[error("no playlist dated on or before {0}")]
    NoEligibleDate(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, PlaylistError>;
