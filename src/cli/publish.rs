use crate::{
    Res,
    config::Settings,
    gist::GistStore,
    publish::update_gist,
    spotify::MusicService,
    success,
    summary::Summary,
};

use super::summarize_and_print;

/// Builds the configured summary and writes it into the gist.
///
/// # Errors
///
/// Fails when the access token cannot be refreshed or when the gist cannot be
/// read or updated. Producer failures are not errors; their sections are
/// published empty.
pub async fn publish<M, G>(music: &mut M, gists: &G, settings: &Settings) -> Res<Summary>
where
    M: MusicService,
    G: GistStore,
{
    let summary = summarize_and_print(music, settings)
        .await
        .map_err(|e| format!("Unable to build summary: {}", e))?;

    update_gist(gists, &settings.gist_id, &summary.text, summary.description)
        .await
        .map_err(|e| format!("Unable to update gist: {}", e))?;

    success!("Gist {} updated ({})", settings.gist_id, summary.description);
    Ok(summary)
}
