use std::time::Duration;

use reqwest::Client;

use crate::error::ScrapeError;
use crate::retry::retry_with_backoff;

/// HTTP client shared by both site scrapers.
///
/// Fetches rendered page HTML and downloads binary files (the tariff PDF).
/// Transient errors (network failures, 429, 5xx) are retried with
/// exponential backoff; other non-2xx statuses surface as typed errors.
pub struct TariffClient {
    client: Client,
    /// Maximum number of retry attempts after the first failure.
    max_retries: u32,
    /// Base delay in seconds for exponential backoff: `backoff_base_secs * 2^attempt`.
    backoff_base_secs: u64,
}

impl TariffClient {
    /// Creates a `TariffClient` with configured timeout, `User-Agent`, and
    /// retry policy. Set `max_retries` to `0` to disable retries.
    ///
    /// # Errors
    ///
    /// Returns [`ScrapeError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(
        timeout_secs: u64,
        user_agent: &str,
        max_retries: u32,
        backoff_base_secs: u64,
    ) -> Result<Self, ScrapeError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;
        Ok(Self {
            client,
            max_retries,
            backoff_base_secs,
        })
    }

    /// Fetches `url` and returns the response body as text, with automatic
    /// retry on transient errors.
    ///
    /// # Errors
    ///
    /// - [`ScrapeError::UnexpectedStatus`] on any non-2xx status after
    ///   retries are exhausted.
    /// - [`ScrapeError::Http`] on network failure after retries are exhausted.
    pub async fn fetch_html(&self, url: &str) -> Result<String, ScrapeError> {
        retry_with_backoff(self.max_retries, self.backoff_base_secs, || async move {
            let response = self.checked_get(url).await?;
            Ok(response.text().await?)
        })
        .await
    }

    /// Downloads `url` and returns the raw response bytes, with automatic
    /// retry on transient errors.
    ///
    /// # Errors
    ///
    /// Same as [`Self::fetch_html`].
    pub async fn download(&self, url: &str) -> Result<Vec<u8>, ScrapeError> {
        retry_with_backoff(self.max_retries, self.backoff_base_secs, || async move {
            let response = self.checked_get(url).await?;
            Ok(response.bytes().await?.to_vec())
        })
        .await
    }

    /// Sends a GET request and converts non-2xx statuses into
    /// [`ScrapeError::UnexpectedStatus`].
    async fn checked_get(&self, url: &str) -> Result<reqwest::Response, ScrapeError> {
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ScrapeError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_owned(),
            });
        }
        Ok(response)
    }
}
