//! Retrieval of the raw feed document.

mod source;

use std::path::PathBuf;
use std::time::Duration;

use reqwest::Client;

use crate::error::FeedError;

pub use source::FeedSource;

/// Request timeout applied to feed downloads. Product feeds are a few MB at
/// most, but the upstream exporter is slow to start streaming.
pub const DEFAULT_TIMEOUT_SECS: u64 = 45;

pub const DEFAULT_USER_AGENT: &str = concat!("shopfeed/", env!("CARGO_PKG_VERSION"));

/// Fetches feed documents over HTTP(S) or from the local filesystem.
///
/// A single attempt is made per call. Non-2xx responses are returned as
/// [`FeedError::UnexpectedStatus`]; transport failures as [`FeedError::Http`].
pub struct FeedClient {
    client: Client,
}

impl FeedClient {
    /// Creates a `FeedClient` with the given request timeout and `User-Agent`.
    ///
    /// # Errors
    ///
    /// Returns [`FeedError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed (e.g., invalid TLS config).
    pub fn new(timeout_secs: u64, user_agent: &str) -> Result<Self, FeedError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;
        Ok(Self { client })
    }

    /// Creates a client with [`DEFAULT_TIMEOUT_SECS`] and [`DEFAULT_USER_AGENT`].
    ///
    /// # Errors
    ///
    /// See [`FeedClient::new`].
    pub fn with_defaults() -> Result<Self, FeedError> {
        Self::new(DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT)
    }

    /// Retrieves the document at `locator` as text.
    ///
    /// # Errors
    ///
    /// - [`FeedError::InvalidLocator`] — the locator is neither an HTTP(S) URL nor a path.
    /// - [`FeedError::Http`] — network or TLS failure, or an undecodable body.
    /// - [`FeedError::UnexpectedStatus`] — any non-2xx status.
    /// - [`FeedError::ReadSource`] — the local file cannot be read as UTF-8 text.
    pub async fn fetch(&self, locator: &str) -> Result<String, FeedError> {
        match FeedSource::parse(locator)? {
            FeedSource::Http(url) => self.fetch_url(url).await,
            FeedSource::File(path) => read_file(path).await,
        }
    }

    async fn fetch_url(&self, url: reqwest::Url) -> Result<String, FeedError> {
        tracing::info!(url = %url, "fetching feed");

        let response = self
            .client
            .get(url.clone())
            .header(
                reqwest::header::ACCEPT,
                "application/xml,text/xml;q=0.9,*/*;q=0.8",
            )
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FeedError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.text().await?;
        tracing::info!(bytes = body.len(), "feed fetched");
        Ok(body)
    }
}

async fn read_file(path: PathBuf) -> Result<String, FeedError> {
    tracing::info!(path = %path.display(), "reading feed from file");
    match tokio::fs::read_to_string(&path).await {
        Ok(body) => {
            tracing::info!(bytes = body.len(), "feed read");
            Ok(body)
        }
        Err(source) => Err(FeedError::ReadSource { path, source }),
    }
}

#[cfg(test)]
#[path = "../client_test.rs"]
mod tests;
