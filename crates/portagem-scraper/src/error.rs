use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    #[error("no tariff PDF link found on {url}")]
    PdfLinkNotFound { url: String },

    #[error("cannot resolve PDF link \"{href}\" against {base}: {reason}")]
    InvalidPdfLink {
        href: String,
        base: String,
        reason: String,
    },

    #[error("failed to save downloaded PDF to {path}: {source}")]
    Save {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
