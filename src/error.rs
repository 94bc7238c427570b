use thiserror::Error;

/// Failures raised by the Spotify and GitHub clients and by the publisher.
#[derive(Debug, Error)]
pub enum Error {
    #[error("{0} must be set")]
    MissingEnv(&'static str),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("authentication failed: {0}")]
    Auth(String),

    #[error("gist {0} has no files")]
    EmptyGist(String),
}
