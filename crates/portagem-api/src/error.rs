use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("invalid API base URL \"{url}\": {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("unexpected HTTP status {status} from the toll API: {body}")]
    UnexpectedStatus { status: u16, body: String },

    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },
}
