//! Configuration management for spotgist.
//!
//! This module handles loading and accessing configuration values from
//! environment variables and `.env` files. The configuration system follows a
//! hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the working directory
//! 3. `.env` file in the local data directory
//! 4. Application defaults (where applicable)

use std::{env, path::PathBuf};

use crate::{
    error::Error,
    summary::Mode,
    types::TimeRange,
    warning,
};

pub const DEFAULT_SPOTIFY_API_URL: &str = "https://api.spotify.com/v1";
pub const DEFAULT_SPOTIFY_API_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";
pub const DEFAULT_GITHUB_API_URL: &str = "https://api.github.com";

/// Loads environment variables from `.env` files.
///
/// Looks in the working directory first and then in the platform-specific
/// local data directory under `spotgist/.env`:
/// - Linux: `~/.local/share/spotgist/.env`
/// - macOS: `~/Library/Application Support/spotgist/.env`
/// - Windows: `%LOCALAPPDATA%/spotgist/.env`
///
/// Values that are already set are never overridden, so CI secrets passed as
/// real environment variables win. Missing files are skipped.
///
/// # Errors
///
/// Returns an error string if a `.env` file exists but cannot be parsed.
pub fn load_env() -> Result<(), String> {
    let local = PathBuf::from(".env");
    if local.is_file() {
        dotenv::from_path(&local).map_err(|e| e.to_string())?;
    }

    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("spotgist/.env");
    if path.is_file() {
        dotenv::from_path(&path).map_err(|e| e.to_string())?;
    }

    Ok(())
}

/// Everything one run needs, resolved from the environment.
#[derive(Debug, Clone)]
pub struct Settings {
    pub client_id: String,
    pub client_secret: String,
    pub refresh_token: String,
    pub github_token: String,
    pub gist_id: String,
    pub mode: Mode,
    pub time_range: TimeRange,
    pub spotify_api_url: String,
    pub spotify_token_url: String,
    pub github_api_url: String,
}

impl Settings {
    /// Reads the full configuration needed to summarize and publish.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingEnv`] naming the first required variable that
    /// is unset or empty.
    pub fn from_env() -> Result<Self, Error> {
        let mut settings = Self::spotify_from_env()?;
        settings.github_token = required("GH_TOKEN")?;
        settings.gist_id = required("GIST_ID")?;
        Ok(settings)
    }

    /// Reads only the Spotify side of the configuration.
    ///
    /// Used by `preview`, which never talks to GitHub; the gist fields are
    /// left empty.
    pub fn spotify_from_env() -> Result<Self, Error> {
        Ok(Self {
            client_id: required("CLIENT_ID")?,
            client_secret: required("CLIENT_SECRET")?,
            refresh_token: required("REFRESH_TOKEN")?,
            github_token: String::new(),
            gist_id: String::new(),
            mode: optional("TYPE").as_deref().map(Mode::from).unwrap_or_default(),
            time_range: time_range_from(optional("TIME_RANGE")),
            spotify_api_url: optional("SPOTIFY_API_URL")
                .unwrap_or_else(|| DEFAULT_SPOTIFY_API_URL.to_string()),
            spotify_token_url: optional("SPOTIFY_API_TOKEN_URL")
                .unwrap_or_else(|| DEFAULT_SPOTIFY_API_TOKEN_URL.to_string()),
            github_api_url: optional("GITHUB_API_URL")
                .unwrap_or_else(|| DEFAULT_GITHUB_API_URL.to_string()),
        })
    }

    /// Applies command-line overrides on top of the environment values.
    pub fn with_overrides(mut self, mode: Option<String>, time_range: Option<String>) -> Self {
        if let Some(mode) = mode {
            self.mode = Mode::from(mode.as_str());
        }
        if time_range.is_some() {
            self.time_range = time_range_from(time_range);
        }
        self
    }
}

/// Resolves a raw time range, warning about values Spotify would not accept.
pub fn time_range_from(raw: Option<String>) -> TimeRange {
    match raw {
        None => TimeRange::default(),
        Some(value) => match value.parse::<TimeRange>() {
            Ok(range) => range,
            Err(e) => {
                warning!("{}", fallback_notice(&e));
                TimeRange::default()
            }
        },
    }
}

/// Warning text for an unusable time range, naming the range used instead.
pub fn fallback_notice(error: &str) -> String {
    format!("{}, falling back to {}", error, TimeRange::default())
}

fn required(key: &'static str) -> Result<String, Error> {
    optional(key).ok_or(Error::MissingEnv(key))
}

fn optional(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
