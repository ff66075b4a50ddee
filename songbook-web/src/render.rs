//! HTML page rendering
//!
//! Page shells are embedded templates with `{{PLACEHOLDER}}` markers; dynamic
//! fragments are built here. All catalog text goes through [`escape_html`].

use songbook_common::{Catalog, LyricsStore, Song, SongId};
use std::fmt::Write;

const LOGIN_HTML: &str = include_str!("../ui/login.html");
const INDEX_HTML: &str = include_str!("../ui/index.html");

/// Escape text for HTML element content and quoted attribute values
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Login form
pub fn login_page() -> String {
    LOGIN_HTML.to_string()
}

/// Catalog page: top songs in configured order, then every song
pub fn index_page(username: &str, catalog: &Catalog, lyrics: &LyricsStore) -> String {
    let top_songs: String = catalog
        .top_songs()
        .enumerate()
        .map(|(rank, (id, song))| top_song_item(rank + 1, id, song))
        .collect();

    let songs: String = catalog
        .songs()
        .map(|(id, song)| song_card(id, song, lyrics))
        .collect();

    INDEX_HTML
        .replace("{{USERNAME}}", &escape_html(username))
        .replace("{{TOP_SONGS}}", &top_songs)
        .replace("{{SONGS}}", &songs)
}

fn top_song_item(rank: usize, id: &SongId, song: &Song) -> String {
    format!(
        "<li><a href=\"#song-{id}\"><span class=\"rank\">{rank}</span> {title} <span class=\"artist\">{artist}</span></a></li>\n",
        id = escape_html(id.as_str()),
        rank = rank,
        title = escape_html(&song.title),
        artist = escape_html(&song.artist),
    )
}

fn song_card(id: &SongId, song: &Song, lyrics: &LyricsStore) -> String {
    let id_attr = escape_html(id.as_str());

    let mut options = String::new();
    for lang in lyrics.languages_for(id) {
        let _ = write!(
            options,
            "<option value=\"{}\">{}</option>",
            lang.code(),
            escape_html(lang.label())
        );
    }

    let lyrics_block = if options.is_empty() {
        "<p class=\"no-lyrics\">Sin letras disponibles</p>".to_string()
    } else {
        format!(
            "<select class=\"lyrics-lang\" data-song-id=\"{id}\">{options}</select>\n\
             <pre class=\"lyrics-text\" id=\"lyrics-{id}\"></pre>",
            id = id_attr,
            options = options,
        )
    };

    format!(
        r#"<article class="song" id="song-{id}" data-song-id="{id}">
  <h3>{title}</h3>
  <p class="artist">{artist}</p>
  <audio controls preload="none" src="/media/{file}"></audio>
  <video controls preload="none" src="/media/{video}"></video>
  <p class="info">{info}</p>
  <div class="lyrics">
  {lyrics_block}
  </div>
</article>
"#,
        id = id_attr,
        title = escape_html(&song.title),
        artist = escape_html(&song.artist),
        file = escape_html(&song.file),
        video = escape_html(&song.video),
        info = escape_html(&song.info),
        lyrics_block = lyrics_block,
    )
}
