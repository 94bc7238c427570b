//! # Summary Module
//!
//! Turns listening data into the text that ends up in the gist.
//!
//! - [`lines`] - fixed-width line templates
//! - [`producers`] - one producer per category; each returns a [`Section`]
//!   and never an error, so one failing endpoint only blanks its own part
//! - [`summarize`] - picks the producers for a [`Mode`] and composes the text

pub mod lines;
pub mod producers;

use std::fmt;

use crate::{spotify::MusicService, types::TimeRange};

pub use producers::{Section, SectionKind};

/// Which summary to publish.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Recently played tracks and top artists side by side.
    Combined,
    RecentlyPlayed,
    TopTracks,
    #[default]
    TopArtists,
}

impl Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Combined => "combined",
            Mode::RecentlyPlayed => "recently_played",
            Mode::TopTracks => "top_tracks",
            Mode::TopArtists => "top_artists",
        }
    }

    /// Short description placed after `🎧 Spotify | ` in the gist.
    pub fn description(&self) -> &'static str {
        match self {
            Mode::Combined => "Recent & Top Artists",
            Mode::RecentlyPlayed => "Recently Played",
            Mode::TopTracks => "My Top Tracks",
            Mode::TopArtists => "My Top Artists",
        }
    }
}

/// Unknown values deliberately map to [`Mode::TopArtists`].
impl From<&str> for Mode {
    fn from(value: &str) -> Self {
        match value.trim() {
            "combined" => Mode::Combined,
            "recently_played" => Mode::RecentlyPlayed,
            "top_tracks" => Mode::TopTracks,
            _ => Mode::TopArtists,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug)]
pub struct Summary {
    pub text: String,
    pub description: &'static str,
    /// Sections that fell back to empty text, in composition order.
    pub failed: Vec<Section>,
}

impl Summary {
    fn compose(description: &'static str, text: String, sections: Vec<Section>) -> Self {
        Self {
            text,
            description,
            failed: sections.into_iter().filter(Section::is_failed).collect(),
        }
    }
}

/// Runs the producers selected by `mode` and composes their output.
///
/// In [`Mode::Combined`] both producers run concurrently on the same client
/// and the result waits for both.
pub async fn summarize<M: MusicService>(music: &M, mode: Mode, time_range: TimeRange) -> Summary {
    let description = mode.description();
    match mode {
        Mode::Combined => {
            let (recent, artists) = tokio::join!(
                producers::recently_played(music),
                producers::top_artists(music, time_range)
            );
            let text = format!(
                "🎧 Recently Played:\n{}\n\n🌟 Top Artists:\n{}",
                recent.text(),
                artists.text()
            );
            Summary::compose(description, text, vec![recent, artists])
        }
        Mode::RecentlyPlayed => single(description, producers::recently_played(music).await),
        Mode::TopTracks => single(description, producers::top_tracks(music, time_range).await),
        Mode::TopArtists => single(description, producers::top_artists(music, time_range).await),
    }
}

fn single(description: &'static str, section: Section) -> Summary {
    if section.is_failed() {
        Summary::compose(description, String::new(), vec![section])
    } else {
        Summary::compose(description, section.into_text(), Vec::new())
    }
}
