#![allow(dead_code)]

use std::{
    collections::BTreeMap,
    sync::{Arc, Mutex},
};

use chrono::{Duration, TimeZone, Utc};
use tokio::sync::Barrier;

use spotgist::{
    config::Settings,
    error::Error,
    gist::GistStore,
    spotify::MusicService,
    summary::Mode,
    types::{
        Album, Artist, Gist, GistFile, GistUpdate, PlayEvent, SimplifiedArtist, TimeRange, Track,
    },
};

pub fn track(id: &str, name: &str, artists: &[&str], album: &str, popularity: u32) -> Track {
    Track {
        id: Some(id.to_string()),
        name: name.to_string(),
        artists: artists
            .iter()
            .map(|a| SimplifiedArtist {
                name: a.to_string(),
            })
            .collect(),
        album: Album {
            name: album.to_string(),
        },
        popularity,
    }
}

pub fn artist(name: &str, genres: &[&str]) -> Artist {
    Artist {
        name: name.to_string(),
        genres: genres.iter().map(|g| g.to_string()).collect(),
    }
}

/// Play events newest first, one minute apart.
pub fn plays(tracks: Vec<Track>) -> Vec<PlayEvent> {
    let newest = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
    tracks
        .into_iter()
        .enumerate()
        .map(|(i, track)| PlayEvent {
            track,
            played_at: newest - Duration::minutes(i as i64),
        })
        .collect()
}

pub fn settings(mode: Mode) -> Settings {
    Settings {
        client_id: "client-id".to_string(),
        client_secret: "client-secret".to_string(),
        refresh_token: "refresh-token".to_string(),
        github_token: "gh-token".to_string(),
        gist_id: "gist-1".to_string(),
        mode,
        time_range: TimeRange::ShortTerm,
        spotify_api_url: "http://spotify.invalid/v1".to_string(),
        spotify_token_url: "http://spotify.invalid/api/token".to_string(),
        github_api_url: "http://github.invalid".to_string(),
    }
}

fn injected(what: &str) -> Error {
    Error::Auth(format!("injected {} failure", what))
}

/// In-memory music service recording every call it receives.
#[derive(Default)]
pub struct FakeMusic {
    pub tracks: Vec<Track>,
    pub artists: Vec<Artist>,
    pub recent: Vec<PlayEvent>,
    pub fail_refresh: bool,
    pub fail_top_tracks: bool,
    pub fail_top_artists: bool,
    pub fail_recent: bool,
    /// When set, `top_artists` and `recently_played` both wait on it, so they
    /// only finish if they run at the same time.
    pub rendezvous: Option<Arc<Barrier>>,
    pub calls: Mutex<Vec<String>>,
    pub access_token: Option<String>,
}

impl FakeMusic {
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }
}

impl MusicService for FakeMusic {
    async fn refresh_access_token(&self) -> Result<String, Error> {
        self.record("refresh".to_string());
        if self.fail_refresh {
            return Err(injected("refresh"));
        }
        Ok("fresh-token".to_string())
    }

    fn set_access_token(&mut self, token: String) {
        self.access_token = Some(token);
    }

    async fn top_tracks(&self, time_range: TimeRange, limit: u32) -> Result<Vec<Track>, Error> {
        self.record(format!("top_tracks {} {}", time_range, limit));
        if self.fail_top_tracks {
            return Err(injected("top tracks"));
        }
        Ok(self.tracks.iter().take(limit as usize).cloned().collect())
    }

    async fn top_artists(&self, time_range: TimeRange, limit: u32) -> Result<Vec<Artist>, Error> {
        self.record(format!("top_artists {} {}", time_range, limit));
        if let Some(barrier) = &self.rendezvous {
            barrier.wait().await;
        }
        if self.fail_top_artists {
            return Err(injected("top artists"));
        }
        Ok(self.artists.iter().take(limit as usize).cloned().collect())
    }

    async fn recently_played(&self, limit: u32) -> Result<Vec<PlayEvent>, Error> {
        self.record(format!("recently_played {}", limit));
        if let Some(barrier) = &self.rendezvous {
            barrier.wait().await;
        }
        if self.fail_recent {
            return Err(injected("recently played"));
        }
        Ok(self.recent.iter().take(limit as usize).cloned().collect())
    }
}

/// In-memory gist that applies updates the way GitHub does.
pub struct FakeGists {
    pub gist: Mutex<Gist>,
    pub fail_get: bool,
    pub fail_update: bool,
    pub updates: Mutex<Vec<GistUpdate>>,
}

impl FakeGists {
    pub fn with_file(filename: &str, content: &str) -> Self {
        let mut files = BTreeMap::new();
        files.insert(
            filename.to_string(),
            GistFile {
                filename: filename.to_string(),
                content: Some(content.to_string()),
            },
        );

        Self {
            gist: Mutex::new(Gist {
                id: "gist-1".to_string(),
                description: Some("old description".to_string()),
                files,
            }),
            fail_get: false,
            fail_update: false,
            updates: Mutex::new(Vec::new()),
        }
    }

    pub fn snapshot(&self) -> Gist {
        self.gist.lock().unwrap().clone()
    }

    pub fn updates(&self) -> Vec<GistUpdate> {
        self.updates.lock().unwrap().clone()
    }
}

impl GistStore for FakeGists {
    async fn get(&self, _gist_id: &str) -> Result<Gist, Error> {
        if self.fail_get {
            return Err(injected("gist get"));
        }
        Ok(self.snapshot())
    }

    async fn update(&self, _gist_id: &str, update: &GistUpdate) -> Result<(), Error> {
        if self.fail_update {
            return Err(injected("gist update"));
        }
        self.updates.lock().unwrap().push(update.clone());

        let mut gist = self.gist.lock().unwrap();
        gist.description = Some(update.description.clone());
        for (old_name, file) in &update.files {
            gist.files.remove(old_name);
            gist.files.insert(file.filename.clone(), file.clone());
        }
        Ok(())
    }
}
