//! Flattening of the location-keyed intermediate form into export records.
//!
//! This is the adapter boundary between extraction and export. Header
//! artifacts that slip through extraction (page footers, site domains picked
//! up as "locations") are filtered here — not in the extractors — so the
//! extractors stay reusable on raw content.

use chrono::Utc;
use portagem_core::{LocationMap, TollRecord};

/// Substrings marking a map key as a non-data header artifact rather than a
/// real route segment. Case-sensitive, matching how the artifacts appear in
/// the source documents.
const HEADER_ARTIFACTS: &[&str] = &[
    "Página",
    "Page ",
    "www.",
    "brisaconcessao.pt",
    "portugaltolls.com",
];

/// Flattens `map` into one [`TollRecord`] per location entry.
///
/// `route_segment` is the map key, `validity_period` is `tariff_year`,
/// `source` is `source_label`, and `scraped_at` is stamped once with the
/// invocation time so all records of one flatten share it. Blank entry
/// fields fall back to `"Class 1"` / `"0.00"`. Keys containing a
/// [`HEADER_ARTIFACTS`] substring are excluded entirely, even when they
/// carry entries.
#[must_use]
pub fn flatten(map: &LocationMap, tariff_year: &str, source_label: &str) -> Vec<TollRecord> {
    let scraped_at = Utc::now().to_rfc3339();
    let mut records = Vec::with_capacity(map.entry_count());

    for (location, entries) in map.iter() {
        if is_header_artifact(location) {
            tracing::debug!(location = %location, "excluding header artifact from flatten");
            continue;
        }

        for entry in entries {
            let vehicle_type = if entry.vehicle_class.is_empty() {
                "Class 1".to_owned()
            } else {
                entry.vehicle_class.clone()
            };
            let price = if entry.price.is_empty() {
                "0.00".to_owned()
            } else {
                entry.price.clone()
            };

            records.push(TollRecord {
                route_segment: location.clone(),
                vehicle_type,
                price,
                currency: entry.currency.clone(),
                validity_period: tariff_year.to_owned(),
                source: source_label.to_owned(),
                scraped_at: scraped_at.clone(),
            });
        }
    }

    records
}

fn is_header_artifact(location: &str) -> bool {
    HEADER_ARTIFACTS
        .iter()
        .any(|artifact| location.contains(artifact))
}
