use std::collections::BTreeMap;

use crate::{
    error::Error,
    gist::GistStore,
    types::{GistFile, GistUpdate},
    utils,
};

pub const DESCRIPTION_PREFIX: &str = "🎧 Spotify | ";

/// Replaces the content and description of the gist's single file.
///
/// The gist is read first to learn the current filename. A failed read aborts
/// before anything is written. The file is renamed to a `.md` name the first
/// time and kept from then on, so repeated runs with the same input send the
/// same request.
///
/// # Errors
///
/// - [`Error::Http`] if reading or updating the gist fails
/// - [`Error::EmptyGist`] if the gist has no file to replace
pub async fn update_gist<G: GistStore>(
    store: &G,
    gist_id: &str,
    content: &str,
    description: &str,
) -> Result<GistUpdate, Error> {
    let gist = store.get(gist_id).await?;

    let old_filename = gist
        .files
        .keys()
        .next()
        .cloned()
        .ok_or_else(|| Error::EmptyGist(gist_id.to_string()))?;

    let update = build_update(&old_filename, content, description);
    store.update(gist_id, &update).await?;

    Ok(update)
}

/// Builds the `PATCH` body replacing `old_filename` with `content`.
///
/// The file keeps its key so GitHub renames it in place instead of adding a
/// second file. The description gets the `🎧 Spotify | ` prefix.
///
/// # Example
///
/// ```
/// let update = build_update("spotify.txt", "▶ ...", "My Top Tracks");
/// assert_eq!(update.files["spotify.txt"].filename, "spotify.md");
/// assert_eq!(update.description, "🎧 Spotify | My Top Tracks");
/// ```
pub fn build_update(old_filename: &str, content: &str, description: &str) -> GistUpdate {
    let mut files = BTreeMap::new();
    files.insert(
        old_filename.to_string(),
        GistFile {
            filename: utils::markdown_filename(old_filename),
            content: Some(content.to_string()),
        },
    );

    GistUpdate {
        description: format!("{}{}", DESCRIPTION_PREFIX, description),
        files,
    }
}
