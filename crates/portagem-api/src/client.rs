//! HTTP client for the toll API.
//!
//! Wraps `reqwest` with bearer-token auth and typed error handling. The API
//! accepts a full replacement batch per submission, so there is exactly one
//! endpoint to call.

use std::time::Duration;

use portagem_core::TollRecord;
use reqwest::{Client, Url};

use crate::error::ApiError;
use crate::types::{SubmitReceipt, TollUpdateRequest};

const UPDATE_ENDPOINT: &str = "api/tolls/update";

/// Client for the downstream toll API.
///
/// Point `base_url` at a mock server in tests; the bearer `token` is sent on
/// every request.
#[derive(Debug)]
pub struct TollApiClient {
    client: Client,
    update_url: Url,
    token: String,
}

impl TollApiClient {
    /// Creates a client for the API at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Http`] if the underlying `reqwest::Client` cannot
    /// be constructed, or [`ApiError::InvalidBaseUrl`] if `base_url` does not
    /// parse.
    pub fn new(base_url: &str, token: &str, timeout_secs: u64) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("portagem/0.1 (toll-tariffs)")
            .build()?;

        // Normalise: ensure the base URL ends with exactly one slash so that
        // join() appends the endpoint instead of replacing the last path
        // segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let update_url = Url::parse(&normalised)
            .and_then(|base| base.join(UPDATE_ENDPOINT))
            .map_err(|e| ApiError::InvalidBaseUrl {
                url: base_url.to_owned(),
                reason: e.to_string(),
            })?;

        Ok(Self {
            client,
            update_url,
            token: token.to_owned(),
        })
    }

    /// Submits `records` as one bulk update.
    ///
    /// # Errors
    ///
    /// - [`ApiError::UnexpectedStatus`] on any non-2xx response, carrying the
    ///   response body for diagnosis.
    /// - [`ApiError::Http`] on network failure.
    /// - [`ApiError::Deserialize`] if a 2xx response body is not valid JSON.
    pub async fn submit_tolls(&self, records: &[TollRecord]) -> Result<SubmitReceipt, ApiError> {
        let request = TollUpdateRequest::from_records(records);
        let url = self.update_url.clone();

        let response = self
            .client
            .put(url.clone())
            .bearer_auth(&self.token)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(ApiError::UnexpectedStatus {
                status: status.as_u16(),
                body,
            });
        }

        let parsed = serde_json::from_str(&body).map_err(|e| ApiError::Deserialize {
            context: url.to_string(),
            source: e,
        })?;

        Ok(SubmitReceipt {
            status_code: status.as_u16(),
            records_sent: request.total_records,
            sent_at: chrono::Utc::now().to_rfc3339(),
            response: parsed,
        })
    }

}
