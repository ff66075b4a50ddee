//! Lyrics store: per-song, per-language lyrics text

use crate::catalog::SongId;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// Supported lyrics languages
///
/// Wire codes follow the URL convention used by the front-end (`jp`, not `ja`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    #[serde(rename = "jp")]
    Japanese,
    #[serde(rename = "es")]
    Spanish,
    #[serde(rename = "en")]
    English,
}

impl Language {
    /// Display order for language selectors
    pub const ALL: [Language; 3] = [Language::Japanese, Language::Spanish, Language::English];

    pub fn code(self) -> &'static str {
        match self {
            Language::Japanese => "jp",
            Language::Spanish => "es",
            Language::English => "en",
        }
    }

    /// Human-readable label in the language itself
    pub fn label(self) -> &'static str {
        match self {
            Language::Japanese => "日本語",
            Language::Spanish => "Español",
            Language::English => "English",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = Error;

    fn from_str(code: &str) -> Result<Self> {
        match code {
            "jp" => Ok(Language::Japanese),
            "es" => Ok(Language::Spanish),
            "en" => Ok(Language::English),
            other => Err(Error::NotFound(format!("unsupported language '{}'", other))),
        }
    }
}

/// Immutable lyrics table keyed by (song, language)
#[derive(Debug, Clone, Default)]
pub struct LyricsStore {
    entries: HashMap<SongId, HashMap<Language, String>>,
}

impl LyricsStore {
    pub fn new(entries: HashMap<SongId, HashMap<Language, String>>) -> Self {
        Self { entries }
    }

    /// Exact lookup by raw URL segments
    ///
    /// Unknown song ids and unsupported or missing languages all yield
    /// `Error::NotFound`; there is no fallback language.
    pub fn lookup(&self, song_id: &str, lang: &str) -> Result<&str> {
        let language: Language = lang.parse()?;
        self.get(&SongId::from(song_id), language).ok_or_else(|| {
            Error::NotFound(format!("no '{}' lyrics for song '{}'", language, song_id))
        })
    }

    pub fn get(&self, song_id: &SongId, language: Language) -> Option<&str> {
        self.entries
            .get(song_id)
            .and_then(|by_lang| by_lang.get(&language))
            .map(String::as_str)
    }

    /// Languages available for a song, in `Language::ALL` order
    pub fn languages_for(&self, song_id: &SongId) -> Vec<Language> {
        match self.entries.get(song_id) {
            Some(by_lang) => Language::ALL
                .into_iter()
                .filter(|lang| by_lang.contains_key(lang))
                .collect(),
            None => Vec::new(),
        }
    }

    /// Total number of (song, language) entries
    pub fn entry_count(&self) -> usize {
        self.entries.values().map(HashMap::len).sum()
    }

    /// Song ids that have at least one lyrics entry
    pub fn song_ids(&self) -> impl Iterator<Item = &SongId> {
        self.entries.keys()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> LyricsStore {
        let mut by_lang = HashMap::new();
        by_lang.insert(Language::English, "la la".to_string());
        by_lang.insert(Language::Japanese, "ラララ".to_string());

        let mut entries = HashMap::new();
        entries.insert(SongId::from("1"), by_lang);
        LyricsStore::new(entries)
    }

    #[test]
    fn test_language_codes_parse() {
        for lang in Language::ALL {
            assert_eq!(lang.code().parse::<Language>().unwrap(), lang);
        }
        assert!("fr".parse::<Language>().is_err());
        assert!("JP".parse::<Language>().is_err());
    }

    #[test]
    fn test_lookup_exact_match() {
        assert_eq!(store().lookup("1", "en").unwrap(), "la la");
    }

    #[test]
    fn test_lookup_missing_language_has_no_fallback() {
        assert!(matches!(store().lookup("1", "es"), Err(Error::NotFound(_))));
    }

    #[test]
    fn test_lookup_unknown_song() {
        assert!(matches!(store().lookup("99", "en"), Err(Error::NotFound(_))));
    }

    #[test]
    fn test_entry_count_counts_translations() {
        assert_eq!(store().entry_count(), 2);
        assert_eq!(LyricsStore::default().entry_count(), 0);
    }

    #[test]
    fn test_languages_for_uses_display_order() {
        let langs = store().languages_for(&SongId::from("1"));
        assert_eq!(langs, vec![Language::Japanese, Language::English]);
        assert!(store().languages_for(&SongId::from("2")).is_empty());
    }
}
