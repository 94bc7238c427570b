use std::collections::HashSet;

use crate::types::{PlayEvent, Track};

pub const ELLIPSIS: char = '…';
pub const BAR_FILLED: char = '█';
pub const BAR_EMPTY: char = '░';
pub const BAR_WIDTH: u32 = 10;

/// Shortens `text` to at most `max_len` characters, marking the cut with `…`.
///
/// Lengths count Unicode scalar values, so multi-byte names are never split
/// inside a character.
pub fn truncate(text: &str, max_len: usize) -> String {
    if text.chars().count() <= max_len {
        return text.to_string();
    }
    if max_len == 0 {
        return String::new();
    }

    let mut out: String = text.chars().take(max_len - 1).collect();
    out.push(ELLIPSIS);
    out
}

/// Pads `text` with dots up to `width` characters. Longer input is untouched.
pub fn pad_right(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len >= width {
        return text.to_string();
    }

    let mut out = String::with_capacity(text.len() + width - len);
    out.push_str(text);
    out.extend(std::iter::repeat_n('.', width - len));
    out
}

/// Renders a 0-100 popularity score as a ten glyph bar, rounding half up.
pub fn popularity_bar(popularity: u32) -> String {
    let filled = (popularity.min(100) + 5) / 10;
    let mut bar: String = std::iter::repeat_n(BAR_FILLED, filled as usize).collect();
    bar.extend(std::iter::repeat_n(BAR_EMPTY, (BAR_WIDTH - filled) as usize));
    bar
}

/// Keeps the first `count` distinct tracks from newest-first play events.
pub fn unique_tracks(events: Vec<PlayEvent>, count: usize) -> Vec<Track> {
    let mut seen_ids = HashSet::new();
    events
        .into_iter()
        .map(|event| event.track)
        .filter(|track| seen_ids.insert(track.id.clone()))
        .take(count)
        .collect()
}

/// Returns the markdown filename a gist file should carry from now on.
///
/// Names already ending in `.md` are kept; otherwise everything from the first
/// dot on is replaced with `.md`.
pub fn markdown_filename(filename: &str) -> String {
    if filename.ends_with(".md") {
        return filename.to_string();
    }

    let stem = filename.split('.').next().unwrap_or_default();
    format!("{}.md", stem)
}
