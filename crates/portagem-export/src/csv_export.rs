//! CSV export of flat tariff records.

use std::path::{Path, PathBuf};

use chrono::Utc;
use portagem_core::TollRecord;

use crate::ExportError;

/// Writes `records` to a CSV file under `dir`, creating the directory if
/// needed. Column headers come from the [`TollRecord`] field names.
///
/// Uses `filename` when given, otherwise a timestamped
/// `portuguese_tolls_YYYYMMDD_HHMMSS.csv`.
///
/// # Errors
///
/// Returns [`ExportError::Io`] on directory creation failure and
/// [`ExportError::Csv`] on write failure.
pub fn export_to_csv(
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
                "portuguese_tolls_{}.csv",
                Utc::now().format("%Y%m%d_%H%M%S")
            )
        },
        str::to_owned,
    );
    let path = dir.join(filename);

    let mut writer = csv::Writer::from_path(&path)?;
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush().map_err(|e| ExportError::Io {
        path: path.clone(),
        source: e,
    })?;

    tracing::info!(path = %path.display(), records = records.len(), "CSV exported");
    Ok(path)
}
