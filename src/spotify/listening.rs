use reqwest::{Client, Request};
use serde::de::DeserializeOwned;

use crate::{
    error::Error,
    types::{Artist, Page, PlayEvent, TimeRange, Track},
};

pub fn top_tracks_url(api_url: &str, time_range: TimeRange, limit: u32) -> String {
    format!(
        "{uri}/me/top/tracks?time_range={time_range}&limit={limit}",
        uri = api_url,
        time_range = time_range,
        limit = limit
    )
}

pub fn top_artists_url(api_url: &str, time_range: TimeRange, limit: u32) -> String {
    format!(
        "{uri}/me/top/artists?time_range={time_range}&limit={limit}",
        uri = api_url,
        time_range = time_range,
        limit = limit
    )
}

pub fn recently_played_url(api_url: &str, limit: u32) -> String {
    format!(
        "{uri}/me/player/recently-played?limit={limit}",
        uri = api_url,
        limit = limit
    )
}

/// Builds an authenticated `GET` for one of the listening endpoints.
pub fn listening_request(http: &Client, url: &str, token: &str) -> Result<Request, Error> {
    Ok(http.get(url).bearer_auth(token).build()?)
}

/// Fetches the user's most played tracks for `time_range`.
///
/// Uses `GET /me/top/tracks`, which requires the `user-top-read` scope.
///
/// # Errors
///
/// Returns [`Error::Http`] for network failures, non-2xx statuses (expired
/// token, rate limiting) and undecodable bodies.
///
/// # Example
///
/// ```
/// let tracks = get_top_tracks(&http, api_url, &token, TimeRange::ShortTerm, 5).await?;
/// ```
pub async fn get_top_tracks(
    http: &Client,
    api_url: &str,
    token: &str,
    time_range: TimeRange,
    limit: u32,
) -> Result<Vec<Track>, Error> {
    let url = top_tracks_url(api_url, time_range, limit);
    let page: Page<Track> = get_json(http, &url, token).await?;
    Ok(page.items)
}

/// Fetches the user's most played artists for `time_range`.
pub async fn get_top_artists(
    http: &Client,
    api_url: &str,
    token: &str,
    time_range: TimeRange,
    limit: u32,
) -> Result<Vec<Artist>, Error> {
    let url = top_artists_url(api_url, time_range, limit);
    let page: Page<Artist> = get_json(http, &url, token).await?;
    Ok(page.items)
}

/// Fetches the latest play events, newest first.
///
/// Uses `GET /me/player/recently-played` (scope `user-read-recently-played`).
/// Spotify caps `limit` at 50.
pub async fn get_recently_played(
    http: &Client,
    api_url: &str,
    token: &str,
    limit: u32,
) -> Result<Vec<PlayEvent>, Error> {
    let url = recently_played_url(api_url, limit);
    let page: Page<PlayEvent> = get_json(http, &url, token).await?;
    Ok(page.items)
}

async fn get_json<T: DeserializeOwned>(http: &Client, url: &str, token: &str) -> Result<T, Error> {
    let request = listening_request(http, url, token)?;
    let response = http.execute(request).await?.error_for_status()?;

    Ok(response.json::<T>().await?)
}
