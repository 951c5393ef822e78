//! JSON export of flat tariff records, wrapped in a small envelope.

use std::path::{Path, PathBuf};

use chrono::Utc;
use portagem_core::TollRecord;
use serde::{Deserialize, Serialize};

use crate::ExportError;

/// The on-disk JSON shape: the records plus when and how many.
#[derive(Debug, Serialize, Deserialize)]
pub struct TariffExport {
    /// ISO-8601 timestamp of the export.
    pub scraped_at: String,
    pub total_tariffs: usize,
    pub tariffs: Vec<TollRecord>,
}

/// Writes `records` as pretty-printed JSON under `dir`, creating the
/// directory if needed.
///
/// Uses `filename` when given, otherwise a timestamped
/// `portuguese_tolls_YYYYMMDD_HHMMSS.json`.
///
/// # Errors
///
/// Returns [`ExportError::Io`] on filesystem failure and
/// [`ExportError::Json`] on serialization failure.
pub fn export_to_json(
    records: &[TollRecord],
    dir: &Path,
    filename: Option<&str>,
) -> Result<PathBuf, ExportError> {
    std::fs::create_dir_all(dir).map_err(|e| ExportError::Io {
        path: dir.to_owned(),
        source: e,
    })?;

    let filename = filename.map_or_else(
        || {
            format!(
                "portuguese_tolls_{}.json",
                Utc::now().format("%Y%m%d_%H%M%S")
            )
        },
        str::to_owned,
    );
    let path = dir.join(filename);

    let export = TariffExport {
        scraped_at: Utc::now().to_rfc3339(),
        total_tariffs: records.len(),
        tariffs: records.to_vec(),
    };
    let json = serde_json::to_string_pretty(&export)?;
    std::fs::write(&path, json).map_err(|e| ExportError::Io {
        path: path.clone(),
        source: e,
    })?;

    tracing::info!(path = %path.display(), records = records.len(), "JSON exported");
    Ok(path)
}

/// Reads a previously exported JSON file back into records, for re-submission
/// without re-scraping.
///
/// # Errors
///
/// Returns [`ExportError::Io`] when the file cannot be read and
/// [`ExportError::Json`] when it does not match the export envelope.
pub fn read_exported_json(path: &Path) -> Result<Vec<TollRecord>, ExportError> {
    let contents = std::fs::read_to_string(path).map_err(|e| ExportError::Io {
        path: path.to_owned(),
        source: e,
    })?;
    let export: TariffExport = serde_json::from_str(&contents)?;
    Ok(export.tariffs)
}
