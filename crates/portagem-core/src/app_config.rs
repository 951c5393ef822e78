use std::path::PathBuf;

use crate::ConfigError;

#[derive(Clone)]
pub struct AppConfig {
    /// Root data directory; the three subdirectories below live under it by
    /// default but can each be overridden independently.
    pub data_dir: PathBuf,
    /// Where downloaded tariff PDFs are stored.
    pub pdf_dir: PathBuf,
    /// Where per-location audit dumps are written after a parse.
    pub parsed_dir: PathBuf,
    /// Where CSV/JSON exports are written.
    pub exports_dir: PathBuf,
    pub log_level: String,
    /// Brisa toll-rates page (carries the tariff PDF download link).
    pub brisa_url: String,
    /// Portugal Tolls tariff page (HTML price tables).
    pub portugal_tolls_url: String,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    pub max_retries: u32,
    pub retry_backoff_base_secs: u64,
    /// Tariff year stamped into exported records, e.g. `"2025"`.
    pub tariff_year: String,
    /// Base URL of the downstream toll API. Submission is skipped when unset.
    pub api_base_url: Option<String>,
    /// Bearer token for the downstream toll API.
    pub api_token: Option<String>,
}

impl AppConfig {
    /// Returns the API base URL and token, or an error naming the first
    /// missing variable. Submission commands call this; the rest of the
    /// pipeline treats the API as optional.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingEnvVar`] when either value is unset.
    pub fn require_api(&self) -> Result<(&str, &str), ConfigError> {
        let base = self
            .api_base_url
            .as_deref()
            .ok_or_else(|| ConfigError::MissingEnvVar("PORTAGEM_API_URL".to_owned()))?;
        let token = self
            .api_token
            .as_deref()
            .ok_or_else(|| ConfigError::MissingEnvVar("PORTAGEM_API_TOKEN".to_owned()))?;
        Ok((base, token))
    }
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("data_dir", &self.data_dir)
            .field("pdf_dir", &self.pdf_dir)
            .field("parsed_dir", &self.parsed_dir)
            .field("exports_dir", &self.exports_dir)
            .field("log_level", &self.log_level)
            .field("brisa_url", &self.brisa_url)
            .field("portugal_tolls_url", &self.portugal_tolls_url)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("user_agent", &self.user_agent)
            .field("max_retries", &self.max_retries)
            .field("retry_backoff_base_secs", &self.retry_backoff_base_secs)
            .field("tariff_year", &self.tariff_year)
            .field("api_base_url", &self.api_base_url)
            .field("api_token", &self.api_token.as_ref().map(|_| "[redacted]"))
            .finish()
    }
}
