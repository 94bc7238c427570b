//! GitHub gist client.
//!
//! Only two calls are needed: read a gist and patch it. [`GistStore`] is the
//! seam the publisher works against; [`GistClient`] implements it over the
//! GitHub REST API.

use std::future::Future;

use reqwest::{Client, Request, RequestBuilder};

use crate::{
    config::Settings,
    error::Error,
    types::{Gist, GistUpdate},
};

const GITHUB_ACCEPT: &str = "application/vnd.github+json";
const GITHUB_API_VERSION: &str = "2022-11-28";
pub const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Read and write access to a single remote gist.
pub trait GistStore {
    /// Fetches the gist with all of its files.
    ///
    /// # Errors
    ///
    /// Returns an error if the gist cannot be read (network failure, bad
    /// token, unknown id). Callers must not attempt a write in that case.
    fn get(&self, gist_id: &str) -> impl Future<Output = Result<Gist, Error>> + Send;

    /// Applies `update` to the gist. Files not named in it stay untouched.
    ///
    /// # Errors
    ///
    /// Returns an error if GitHub rejects or never receives the update.
    fn update(
        &self,
        gist_id: &str,
        update: &GistUpdate,
    ) -> impl Future<Output = Result<(), Error>> + Send;
}

/// [`GistStore`] backed by `GET` and `PATCH /gists/{id}`.
pub struct GistClient {
    http: Client,
    api_url: String,
    token: String,
}

impl GistClient {
    /// Builds a client for `settings.github_api_url`, authenticating with
    /// `settings.github_token`. One client is meant to be reused for the run.
    ///
    /// # Example
    ///
    /// ```
    /// let gists = GistClient::new(&settings);
    /// let gist = gists.get(&settings.gist_id).await?;
    /// ```
    pub fn new(settings: &Settings) -> Self {
        Self {
            http: Client::new(),
            api_url: settings.github_api_url.trim_end_matches('/').to_string(),
            token: settings.github_token.clone(),
        }
    }

    /// Request reading the gist, without sending it.
    pub fn get_request(&self, gist_id: &str) -> Result<Request, Error> {
        Ok(self.authorized(self.http.get(self.gist_url(gist_id))).build()?)
    }

    /// Request patching the gist with `update` as JSON body, without sending it.
    pub fn update_request(&self, gist_id: &str, update: &GistUpdate) -> Result<Request, Error> {
        Ok(self
            .authorized(self.http.patch(self.gist_url(gist_id)))
            .json(update)
            .build()?)
    }

    fn gist_url(&self, gist_id: &str) -> String {
        format!("{uri}/gists/{id}", uri = self.api_url, id = gist_id)
    }

    // GitHub rejects requests without a User-Agent.
    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        request
            .header("Authorization", format!("token {}", self.token))
            .header("Accept", GITHUB_ACCEPT)
            .header("X-GitHub-Api-Version", GITHUB_API_VERSION)
            .header("User-Agent", USER_AGENT)
    }
}

impl GistStore for GistClient {
    async fn get(&self, gist_id: &str) -> Result<Gist, Error> {
        let request = self.get_request(gist_id)?;
        let response = self.http.execute(request).await?.error_for_status()?;

        Ok(response.json::<Gist>().await?)
    }

    async fn update(&self, gist_id: &str, update: &GistUpdate) -> Result<(), Error> {
        let request = self.update_request(gist_id, update)?;
        self.http.execute(request).await?.error_for_status()?;

        Ok(())
    }
}
