use crate::{
    types::{Artist, Track},
    utils::{pad_right, popularity_bar, truncate},
};

pub const TRACK_NAME_WIDTH: usize = 35;
pub const TRACK_ARTIST_WIDTH: usize = 16;
pub const ARTIST_NAME_WIDTH: usize = 15;
pub const ARTIST_GENRES_WIDTH: usize = 40;
pub const RECENT_NAME_WIDTH: usize = 30;
pub const RECENT_ARTISTS_WIDTH: usize = 40;
pub const RECENT_ALBUM_WIDTH: usize = 30;

/// `▶ {name........} 🎵 {primary artist}`
///
/// Both values get a trailing space before truncation so a cut name keeps a
/// gap between the ellipsis and the next glyph.
pub fn top_track_line(track: &Track) -> String {
    let artist = track.artists.first().map(|a| a.name.as_str()).unwrap_or_default();
    format!(
        "▶ {} 🎵 {}",
        pad_right(&truncate(&format!("{} ", track.name), TRACK_NAME_WIDTH), TRACK_NAME_WIDTH),
        truncate(&format!("{} ", artist), TRACK_ARTIST_WIDTH)
    )
}

/// `▶ {name...} 💽 {genre, genre}`
pub fn top_artist_line(artist: &Artist) -> String {
    let genres = artist
        .genres
        .iter()
        .take(2)
        .cloned()
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "▶ {} 💽 {}",
        pad_right(&truncate(&format!("{} ", artist.name), ARTIST_NAME_WIDTH), ARTIST_NAME_WIDTH),
        truncate(&format!("{} ", genres), ARTIST_GENRES_WIDTH)
    )
}

/// Four line block describing one recently played track.
pub fn recent_track_block(track: &Track) -> String {
    let artists = track
        .artists
        .iter()
        .map(|a| a.name.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "🎵 {}\n   - Artist(s): {}\n   - Album: {}\n   - Popularity: {}",
        truncate(&track.name, RECENT_NAME_WIDTH),
        truncate(&artists, RECENT_ARTISTS_WIDTH),
        truncate(&track.album.name, RECENT_ALBUM_WIDTH),
        popularity_bar(track.popularity)
    )
}
