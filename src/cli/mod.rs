//! # CLI Module
//!
//! Run orchestration behind the `spotgist` subcommands. Each command takes its
//! clients as arguments; `main` builds one client per external service and
//! hands them in, and tests pass in-memory fakes instead.
//!
//! ## Commands
//!
//! - [`publish`] - refresh the token, build the summary, print it, write the gist
//! - [`preview`] - same up to printing; never touches the gist
//!
//! ## Data Flow
//!
//! ```text
//! token refresh → summary::summarize → stdout → publish::update_gist
//! ```
//!
//! A producer failure only empties its section and is reported as a warning.
//! A failed token refresh or gist call ends the run with an error, which `main`
//! reports before exiting.

mod preview;
mod publish;

pub use preview::preview;
pub use publish::publish;

use crate::{
    config::Settings,
    error::Error,
    info,
    spotify::MusicService,
    summary::{self, Section, Summary},
    warning,
};

/// Shared first half of every run: authenticate, summarize, print.
async fn summarize_and_print<M: MusicService>(
    music: &mut M,
    settings: &Settings,
) -> Result<Summary, Error> {
    info!("Refreshing Spotify access token...");
    let token = music.refresh_access_token().await?;
    music.set_access_token(token);

    info!(
        "Building {} summary ({})",
        settings.mode, settings.time_range
    );
    let summary = summary::summarize(&*music, settings.mode, settings.time_range).await;

    for section in &summary.failed {
        if let Section::Failed { kind, error } = section {
            warning!("Error getting {}: {}", kind, error);
        }
    }

    println!("{}", summary.text);
    Ok(summary)
}
