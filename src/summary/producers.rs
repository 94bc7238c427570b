use std::fmt;

use crate::{
    error::Error,
    spotify::MusicService,
    types::TimeRange,
    utils,
};

use super::lines::{recent_track_block, top_artist_line, top_track_line};

pub const TOP_LIMIT: u32 = 5;
/// Over-fetched so replays of the same track can be skipped.
pub const RECENT_FETCH_LIMIT: u32 = 20;
pub const RECENT_UNIQUE_COUNT: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionKind {
    TopTracks,
    TopArtists,
    RecentlyPlayed,
}

impl fmt::Display for SectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SectionKind::TopTracks => "top tracks",
            SectionKind::TopArtists => "top artists",
            SectionKind::RecentlyPlayed => "recently played tracks",
        })
    }
}

/// Outcome of one producer. A failed section renders as empty text.
#[derive(Debug)]
pub enum Section {
    Ready(String),
    Failed { kind: SectionKind, error: Error },
}

impl Section {
    /// Rendered text, or `""` for a failed section.
    pub fn text(&self) -> &str {
        match self {
            Section::Ready(text) => text,
            Section::Failed { .. } => "",
        }
    }

    /// Owned variant of [`Section::text`].
    pub fn into_text(self) -> String {
        match self {
            Section::Ready(text) => text,
            Section::Failed { .. } => String::new(),
        }
    }

    /// `true` when the client call behind this section returned an error.
    pub fn is_failed(&self) -> bool {
        matches!(self, Section::Failed { .. })
    }

    fn from_result(kind: SectionKind, result: Result<String, Error>) -> Self {
        match result {
            Ok(text) => Section::Ready(text),
            Err(error) => Section::Failed { kind, error },
        }
    }
}

/// One line per top track, joined by newlines.
///
/// Never fails: a client error is returned as [`Section::Failed`] with
/// [`SectionKind::TopTracks`].
pub async fn top_tracks<M: MusicService>(music: &M, time_range: TimeRange) -> Section {
    let result = music.top_tracks(time_range, TOP_LIMIT).await.map(|tracks| {
        tracks
            .iter()
            .map(top_track_line)
            .collect::<Vec<_>>()
            .join("\n")
    });
    Section::from_result(SectionKind::TopTracks, result)
}

/// One line per top artist with its first two genres.
pub async fn top_artists<M: MusicService>(music: &M, time_range: TimeRange) -> Section {
    let result = music.top_artists(time_range, TOP_LIMIT).await.map(|artists| {
        artists
            .iter()
            .map(top_artist_line)
            .collect::<Vec<_>>()
            .join("\n")
    });
    Section::from_result(SectionKind::TopArtists, result)
}

/// Renders the two most recent distinct tracks, separated by a blank line.
pub async fn recently_played<M: MusicService>(music: &M) -> Section {
    let result = music.recently_played(RECENT_FETCH_LIMIT).await.map(|events| {
        utils::unique_tracks(events, RECENT_UNIQUE_COUNT)
            .iter()
            .map(recent_track_block)
            .collect::<Vec<_>>()
            .join("\n\n")
    });
    Section::from_result(SectionKind::RecentlyPlayed, result)
}
