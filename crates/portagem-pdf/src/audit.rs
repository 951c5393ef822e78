//! Audit dump of the intermediate location-keyed form.
//!
//! Written after each successful parse so the pre-flatten data can be
//! inspected later. The file is throwaway output, not an input to anything.

use std::path::{Path, PathBuf};

use chrono::Utc;
use portagem_core::LocationMap;

use crate::PdfError;

/// Writes `map` as pretty-printed UTF-8 JSON under `dir`, creating the
/// directory if needed.
///
/// The file name is timestamped (`tolls_by_location_YYYYMMDD_HHMMSS.json`).
/// Non-ASCII route labels ("Valença") are written literally, not escaped —
/// `serde_json` emits UTF-8 as-is.
///
/// # Errors
///
/// Returns [`PdfError::Io`] on directory or file write failure and
/// [`PdfError::Json`] on serialization failure.
pub fn save_location_data(map: &LocationMap, dir: &Path) -> Result<PathBuf, PdfError> {
    std::fs::create_dir_all(dir)?;

    let filename = format!(
        "tolls_by_location_{}.json",
        Utc::now().format("%Y%m%d_%H%M%S")
    );
    let path = dir.join(filename);

    let json = serde_json::to_string_pretty(map)?;
    std::fs::write(&path, json)?;

    tracing::info!(path = %path.display(), locations = map.len(), "saved parsed tariff data");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample::sample_data;

    #[test]
    fn writes_a_timestamped_json_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = save_location_data(&sample_data(), dir.path()).unwrap();

        let name = path.file_name().unwrap().to_str().unwrap();
        assert!(name.starts_with("tolls_by_location_"));
        assert!(name.ends_with(".json"));

        let contents = std::fs::read_to_string(&path).unwrap();
        let parsed: LocationMap = serde_json::from_str(&contents).unwrap();
        assert_eq!(parsed, sample_data());
    }

    #[test]
    fn preserves_non_ascii_labels_literally() {
        let dir = tempfile::tempdir().unwrap();
        let path = save_location_data(&sample_data(), dir.path()).unwrap();
        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.contains("A3 Porto-Valença"));
        assert!(!contents.contains("\\u00e7"));
    }

    #[test]
    fn creates_the_directory_when_missing() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("data").join("parsed");
        let path = save_location_data(&sample_data(), &nested).unwrap();
        assert!(path.exists());
    }
}
