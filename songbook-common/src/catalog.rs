//! Catalog store: song metadata keyed by song identifier

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Song identifier as it appears in URLs and data files (e.g. `"1"`)
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SongId(String);

impl SongId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SongId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SongId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// Song metadata record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Song {
    pub title: String,
    pub artist: String,
    /// Audio file name, relative to the media directory
    pub file: String,
    /// Video file name, relative to the media directory
    pub video: String,
    /// Descriptive text shown under the player
    pub info: String,
}

/// Immutable song catalog plus the ordered top-songs list
///
/// Every id in `top_songs` is guaranteed to exist in `songs`.
#[derive(Debug, Clone, Serialize)]
pub struct Catalog {
    songs: BTreeMap<SongId, Song>,
    top_songs: Vec<SongId>,
}

impl Catalog {
    /// Build a catalog, rejecting top-song ids that have no catalog entry
    pub fn new(songs: BTreeMap<SongId, Song>, top_songs: Vec<SongId>) -> Result<Self> {
        if let Some(missing) = top_songs.iter().find(|id| !songs.contains_key(*id)) {
            return Err(Error::InvalidInput(format!(
                "top song '{}' is not in the catalog",
                missing
            )));
        }

        Ok(Self { songs, top_songs })
    }

    pub fn get(&self, id: &SongId) -> Option<&Song> {
        self.songs.get(id)
    }

    pub fn contains(&self, id: &SongId) -> bool {
        self.songs.contains_key(id)
    }

    /// All songs in identifier order
    pub fn songs(&self) -> impl Iterator<Item = (&SongId, &Song)> {
        self.songs.iter()
    }

    /// Top songs in their configured order
    pub fn top_songs(&self) -> impl Iterator<Item = (&SongId, &Song)> {
        // Construction guarantees every id resolves
        self.top_songs
            .iter()
            .filter_map(|id| self.songs.get(id).map(|song| (id, song)))
    }

    pub fn top_song_ids(&self) -> &[SongId] {
        &self.top_songs
    }

    pub fn len(&self) -> usize {
        self.songs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.songs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn song(title: &str) -> Song {
        Song {
            title: title.to_string(),
            artist: "Ado".to_string(),
            file: format!("{}.mp3", title),
            video: format!("{}_video.mp4", title),
            info: String::new(),
        }
    }

    #[test]
    fn test_new_rejects_dangling_top_song() {
        let mut songs = BTreeMap::new();
        songs.insert(SongId::from("1"), song("a"));

        let err = Catalog::new(songs, vec![SongId::from("1"), SongId::from("7")]).unwrap_err();
        match err {
            Error::InvalidInput(msg) => assert!(msg.contains("'7'")),
            other => panic!("Expected InvalidInput, got {:?}", other),
        }
    }

    #[test]
    fn test_top_songs_preserve_configured_order() {
        let mut songs = BTreeMap::new();
        songs.insert(SongId::from("1"), song("a"));
        songs.insert(SongId::from("2"), song("b"));
        songs.insert(SongId::from("3"), song("c"));

        let catalog =
            Catalog::new(songs, vec![SongId::from("3"), SongId::from("1")]).unwrap();

        let titles: Vec<&str> = catalog.top_songs().map(|(_, s)| s.title.as_str()).collect();
        assert_eq!(titles, vec!["c", "a"]);
        assert_eq!(catalog.len(), 3);
    }

    #[test]
    fn test_song_id_serializes_as_plain_string() {
        let json = serde_json::to_string(&SongId::from("42")).unwrap();
        assert_eq!(json, "\"42\"");
    }
}
