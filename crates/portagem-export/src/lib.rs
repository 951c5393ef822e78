//! File exporters for scraped tariff records.
//!
//! CSV for spreadsheet use, JSON (with a small envelope) for downstream
//! tooling. File names are timestamped by default so repeated runs never
//! clobber earlier exports.

pub mod csv_export;
pub mod json_export;

use std::path::PathBuf;

use thiserror::Error;

pub use csv_export::export_to_csv;
pub use json_export::{export_to_json, read_exported_json, TariffExport};

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error for {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
