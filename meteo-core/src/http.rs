use std::time::Duration;

use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use tracing::{debug, error};

use crate::error::FetchError;

/// Thin wrapper over a shared [`reqwest::Client`] issuing one GET per call.
///
/// No retries are attempted: a single failed attempt is a failed call.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    http: Client,
}

impl HttpFetcher {
    /// Build a fetcher whose requests give up after `timeout`.
    /// `None` keeps the transport's default behaviour.
    pub fn new(timeout: Option<Duration>) -> Result<Self, FetchError> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().map_err(FetchError::Network)?;
        Ok(Self { http })
    }

    /// GET `url` and decode its JSON body into `T`.
    ///
    /// Every failure is also reported through `tracing::error!` before it is
    /// returned, so callers may or may not log it again.
    pub async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, FetchError> {
        let result = self.fetch(url).await;
        if let Err(err) = &result {
            match err.body_excerpt() {
                Some(body) if !body.is_empty() => error!(body, "Network or request error: {err}"),
                _ => error!("Network or request error: {err}"),
            }
        }
        result
    }

    async fn fetch<T: DeserializeOwned>(&self, url: Url) -> Result<T, FetchError> {
        debug!(url = %url, "GET");

        let res = self.http.get(url).send().await.map_err(FetchError::Network)?;

        let status = res.status();
        let body = res.text().await.map_err(FetchError::Network)?;

        if !status.is_success() {
            return Err(FetchError::http_status(status, &body));
        }

        serde_json::from_str(&body).map_err(FetchError::MalformedResponse)
    }
}
