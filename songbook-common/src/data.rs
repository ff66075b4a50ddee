//! Data set loading: credentials, catalog, lyrics
//!
//! The built-in set is embedded at compile time. A TOML data file with the
//! same layout can replace it at startup:
//!
//! ```toml
//! top_songs = ["1"]
//!
//! [users]
//! fan_ado = "12345"
//!
//! [songs.1]
//! title = "..."
//! artist = "..."
//! file = "song.mp3"
//! video = "song_video.mp4"
//! info = "..."
//!
//! [lyrics.1]
//! en = "..."
//! ```

use crate::catalog::{Catalog, Song, SongId};
use crate::credentials::CredentialStore;
use crate::lyrics::{Language, LyricsStore};
use crate::{Error, Result};
use serde::Deserialize;
use std::collections::{BTreeMap, HashMap};
use std::path::Path;
use tracing::warn;

const BUILTIN_DATA: &str = include_str!("../data/builtin.toml");

/// On-disk layout of a data file
#[derive(Debug, Deserialize)]
struct RawDataSet {
    #[serde(default)]
    users: HashMap<String, String>,
    #[serde(default)]
    songs: BTreeMap<SongId, Song>,
    #[serde(default)]
    lyrics: HashMap<SongId, HashMap<String, String>>,
    #[serde(default)]
    top_songs: Vec<SongId>,
}

/// Everything the service serves, immutable after load
#[derive(Debug, Clone)]
pub struct DataSet {
    pub credentials: CredentialStore,
    pub catalog: Catalog,
    pub lyrics: LyricsStore,
}

impl DataSet {
    /// The embedded default data set
    pub fn builtin() -> Result<Self> {
        Self::from_toml_str(BUILTIN_DATA)
    }

    pub fn from_toml_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::Config(format!("Failed to read data file {}: {}", path.display(), e))
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let raw: RawDataSet = toml::from_str(content)?;

        // Lyrics for unknown songs are kept; lookups just never reach them
        // through the catalog UI.
        for song_id in raw.lyrics.keys() {
            if !raw.songs.contains_key(song_id) {
                warn!("Lyrics defined for song '{}' which is not in the catalog", song_id);
            }
        }

        let mut lyrics = HashMap::with_capacity(raw.lyrics.len());
        for (song_id, by_code) in raw.lyrics {
            let mut by_lang = HashMap::with_capacity(by_code.len());
            for (code, text) in by_code {
                let language: Language = code.parse().map_err(|_| {
                    Error::InvalidInput(format!(
                        "unsupported language '{}' in lyrics for song '{}'",
                        code, song_id
                    ))
                })?;
                by_lang.insert(language, text);
            }
            lyrics.insert(song_id, by_lang);
        }

        Ok(Self {
            credentials: CredentialStore::new(raw.users),
            catalog: Catalog::new(raw.songs, raw.top_songs)?,
            lyrics: LyricsStore::new(lyrics),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_data_set_loads() {
        let data = DataSet::builtin().unwrap();

        assert_eq!(data.catalog.len(), 2);
        assert_eq!(
            data.catalog.top_song_ids(),
            &[SongId::from("1"), SongId::from("2")]
        );
        assert!(data.credentials.verify("fan_ado", "12345"));

        let usseewa = data.catalog.get(&SongId::from("1")).unwrap();
        assert_eq!(usseewa.title, "うっせぇわ (Usseewa)");
        assert_eq!(usseewa.file, "usseewa.mp3");
        assert_eq!(usseewa.video, "usseewa_video.mp4");
    }

    #[test]
    fn test_builtin_lyrics_have_no_leading_newline() {
        let data = DataSet::builtin().unwrap();
        let es = data.lyrics.lookup("1", "es").unwrap();
        assert!(es.starts_with("Cállate, cállate, cállate"));
        assert!(es.ends_with("Tu justicia impuesta es ridícula"));
    }

    #[test]
    fn test_every_builtin_song_has_all_languages() {
        let data = DataSet::builtin().unwrap();
        for (id, _) in data.catalog.songs() {
            assert_eq!(data.lyrics.languages_for(id), Language::ALL.to_vec());
        }
    }

    #[test]
    fn test_malformed_toml_rejected() {
        assert!(matches!(
            DataSet::from_toml_str("top_songs = [1"),
            Err(Error::Toml(_))
        ));
    }

    #[test]
    fn test_dangling_top_song_rejected() {
        let content = r#"
            top_songs = ["1", "9"]

            [songs.1]
            title = "t"
            artist = "a"
            file = "f.mp3"
            video = "v.mp4"
            info = "i"
        "#;

        assert!(matches!(
            DataSet::from_toml_str(content),
            Err(Error::InvalidInput(_))
        ));
    }

    #[test]
    fn test_unknown_language_key_rejected() {
        let content = r#"
            [lyrics.1]
            fr = "non"
        "#;

        assert!(matches!(
            DataSet::from_toml_str(content),
            Err(Error::InvalidInput(_))
        ));
    }

    #[test]
    fn test_lyrics_for_unknown_song_are_accepted() {
        let content = r#"
            [lyrics.5]
            en = "orphan"
        "#;

        let data = DataSet::from_toml_str(content).unwrap();
        assert!(data.catalog.is_empty());
        assert_eq!(data.lyrics.lookup("5", "en").unwrap(), "orphan");
    }
}
