//! Error type shared by the fetch and visualization pipelines.

use std::path::PathBuf;

use reqwest::StatusCode;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid URL {url}: {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} returned HTTP {status}")]
    HttpStatus { url: String, status: StatusCode },

    #[error("response from {url} is not valid JSON: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("unexpected {feed} payload: {source}")]
    Shape {
        feed: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("history log {} does not exist", .0.display())]
    MissingFile(PathBuf),

    #[error("{}:{line}: {reason}", .path.display())]
    Parse {
        path: PathBuf,
        line: usize,
        reason: String,
    },

    #[error("chart rendering failed: {0}")]
    Chart(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// True for failures reaching or talking to the remote API.
    pub fn is_network(&self) -> bool {
        matches!(
            self,
            Error::InvalidUrl { .. }
                | Error::Client(_)
                | Error::Transport { .. }
                | Error::HttpStatus { .. }
                | Error::Decode { .. }
        )
    }
}
