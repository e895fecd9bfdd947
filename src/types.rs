use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tabled::Tabled;

/// Track names in playing order.
pub type TrackList = Vec<String>;

/// Date-keyed collection of track lists as served by the playlist feed.
///
/// The feed is a flat JSON object, `{"20210701": ["a", "b"], ...}`, so the
/// set deserializes transparently from it. Keys are kept verbatim; whether a
/// key is a valid date is decided later by the resolver.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlaylistSet(BTreeMap<String, TrackList>);

impl PlaylistSet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Adds or replaces the track list for `key`, returning the set for chaining.
    ///
    /// # Example
    ///
    /// ```
    /// let mut playlists = PlaylistSet::new();
    /// playlists
    ///     .insert("20210701", vec!["aa".into(), "bb".into()])
    ///     .insert("20210702", vec!["cc".into()]);
    /// assert_eq!(playlists.len(), 2);
    /// ```
    pub fn insert(&mut self, key: impl Into<String>, tracks: TrackList) -> &mut Self {
        self.0.insert(key.into(), tracks);
        self
    }

    /// Track list stored under the verbatim key, if any.
    pub fn get(&self, key: &str) -> Option<&TrackList> {
        self.0.get(key)
    }

    /// Keys in lexicographic order, which is not date order for every format.
    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.0.keys()
    }

    /// Key and track list pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &TrackList)> {
        self.0.iter()
    }

    /// Number of keys, valid dates or not.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when the feed has no keys at all.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, TrackList)> for PlaylistSet {
    fn from_iter<I: IntoIterator<Item = (K, TrackList)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

/// How a single key of the feed relates to the reference date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyStatus {
    /// Exact match for the reference date
    Today,
    /// Latest past date, picked when there is no exact match
    Latest,
    Past,
    Upcoming,
    Invalid,
}

impl std::fmt::Display for KeyStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            KeyStatus::Today => "today",
            KeyStatus::Latest => "latest",
            KeyStatus::Past => "past",
            KeyStatus::Upcoming => "upcoming",
            KeyStatus::Invalid => "invalid",
        };
        f.write_str(s)
    }
}

#[derive(Tabled)]
pub struct PlaylistTableRow {
    pub date: String,
    pub tracks: usize,
    pub status: String,
}
