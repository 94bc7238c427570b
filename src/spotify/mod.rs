//! # Spotify Integration Module
//!
//! Thin client for the parts of the Spotify Web API the summary needs:
//!
//! ```text
//! Summary producers
//!          ↓
//! MusicService (trait)
//!          ↓
//! SpotifyClient
//!     ├── auth       POST /api/token (refresh_token grant)
//!     └── listening  GET /me/top/tracks, /me/top/artists,
//!                    /me/player/recently-played
//!          ↓
//! HTTP Layer (reqwest, JSON)
//! ```
//!
//! The producers only see the [`MusicService`] trait, so tests drive them with
//! in-memory fakes. One [`SpotifyClient`] is built per run and reused for every
//! call; it holds a single `reqwest::Client` so connections are pooled.
//!
//! No call is retried. A failed request surfaces as [`Error`] and the caller
//! decides whether it is fatal (token refresh) or soft (a producer).

pub mod auth;
pub mod listening;

use std::future::Future;

use reqwest::Client;

use crate::{
    config::Settings,
    error::Error,
    types::{Artist, PlayEvent, TimeRange, Track},
};

/// Capabilities the run needs from the music service.
pub trait MusicService {
    /// Obtains a fresh access token from the configured refresh token.
    fn refresh_access_token(&self) -> impl Future<Output = Result<String, Error>> + Send;

    /// Sets the bearer token used by every subsequent request.
    fn set_access_token(&mut self, token: String);

    /// The user's `limit` most played tracks over `time_range`.
    fn top_tracks(
        &self,
        time_range: TimeRange,
        limit: u32,
    ) -> impl Future<Output = Result<Vec<Track>, Error>> + Send;

    /// The user's `limit` most played artists over `time_range`.
    fn top_artists(
        &self,
        time_range: TimeRange,
        limit: u32,
    ) -> impl Future<Output = Result<Vec<Artist>, Error>> + Send;

    /// Latest play events, newest first.
    fn recently_played(&self, limit: u32) -> impl Future<Output = Result<Vec<PlayEvent>, Error>> + Send;
}

/// [`MusicService`] over the Spotify Web API.
///
/// Holds the credentials needed to refresh the access token and the token
/// itself once set. Listening calls made before a token is set fail with
/// [`Error::Auth`] without touching the network.
pub struct SpotifyClient {
    http: Client,
    api_url: String,
    token_url: String,
    client_id: String,
    client_secret: String,
    refresh_token: String,
    access_token: Option<String>,
}

impl SpotifyClient {
    /// Builds a client from the Spotify half of `settings`.
    ///
    /// # Example
    ///
    /// ```
    /// let mut music = SpotifyClient::new(&settings);
    /// let token = music.refresh_access_token().await?;
    /// music.set_access_token(token);
    /// let tracks = music.top_tracks(TimeRange::ShortTerm, 5).await?;
    /// ```
    pub fn new(settings: &Settings) -> Self {
        Self {
            http: Client::new(),
            api_url: settings.spotify_api_url.trim_end_matches('/').to_string(),
            token_url: settings.spotify_token_url.clone(),
            client_id: settings.client_id.clone(),
            client_secret: settings.client_secret.clone(),
            refresh_token: settings.refresh_token.clone(),
            access_token: None,
        }
    }

    fn access_token(&self) -> Result<&str, Error> {
        self.access_token
            .as_deref()
            .ok_or_else(|| Error::Auth("no access token set".to_string()))
    }
}

impl MusicService for SpotifyClient {
    async fn refresh_access_token(&self) -> Result<String, Error> {
        let token = auth::refresh_token(
            &self.http,
            &self.token_url,
            &self.client_id,
            &self.client_secret,
            &self.refresh_token,
        )
        .await?;
        Ok(token.access_token)
    }

    fn set_access_token(&mut self, token: String) {
        self.access_token = Some(token);
    }

    async fn top_tracks(&self, time_range: TimeRange, limit: u32) -> Result<Vec<Track>, Error> {
        let token = self.access_token()?;
        listening::get_top_tracks(&self.http, &self.api_url, token, time_range, limit).await
    }

    async fn top_artists(&self, time_range: TimeRange, limit: u32) -> Result<Vec<Artist>, Error> {
        let token = self.access_token()?;
        listening::get_top_artists(&self.http, &self.api_url, token, time_range, limit).await
    }

    async fn recently_played(&self, limit: u32) -> Result<Vec<PlayEvent>, Error> {
        let token = self.access_token()?;
        listening::get_recently_played(&self.http, &self.api_url, token, limit).await
    }
}
