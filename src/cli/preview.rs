use crate::{Res, config::Settings, spotify::MusicService, summary::Summary};

use super::summarize_and_print;

/// Prints the summary that `publish` would write, without touching the gist.
pub async fn preview<M: MusicService>(music: &mut M, settings: &Settings) -> Res<Summary> {
    let summary = summarize_and_print(music, settings)
        .await
        .map_err(|e| format!("Unable to build summary: {}", e))?;
    Ok(summary)
}
