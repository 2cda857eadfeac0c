mod basic;

pub use basic::BasicClient;

use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;

use crate::error::{Error, Result};

/// Transport seam for the API client; wrap it to add headers, auth or logging.
#[async_trait]
pub trait HttpClient: Send + Sync {
    async fn execute(&self, req: reqwest::Request) -> reqwest::Result<reqwest::Response>;
}

/// GETs `url` and parses the body as JSON.
///
/// # Errors
///
/// [`Error::Transport`] if the request cannot be sent, times out, or the body
/// cannot be read; [`Error::HttpStatus`] on a 4xx/5xx response;
/// [`Error::Decode`] if the body is not JSON. There are no retries.
pub async fn get_json<C: HttpClient>(client: &C, url: &str) -> Result<Value> {
    let parsed = reqwest::Url::parse(url).map_err(|e| Error::InvalidUrl {
        url: url.to_string(),
        reason: e.to_string(),
    })?;
    let req = reqwest::Request::new(reqwest::Method::GET, parsed);

    let resp = client.execute(req).await.map_err(|source| Error::Transport {
        url: url.to_string(),
        source,
    })?;

    let status = resp.status();
    if status.is_client_error() || status.is_server_error() {
        return Err(Error::HttpStatus {
            url: url.to_string(),
            status,
        });
    }

    let body = resp.bytes().await.map_err(|source| Error::Transport {
        url: url.to_string(),
        source,
    })?;
    debug!(url, bytes = body.len(), %status, "Response received");

    serde_json::from_slice(&body).map_err(|source| Error::Decode {
        url: url.to_string(),
        source,
    })
}
