//! Domain records shared across the scraping, parsing, and export crates.
//!
//! Two shapes exist on purpose. [`LocationEntry`] is the intermediate form
//! produced by PDF extraction, grouped per route segment inside a
//! [`LocationMap`]. [`TollRecord`] is the flat, export-ready form written to
//! CSV/JSON and submitted to the API. Flattening from one to the other lives
//! in `portagem-pdf` so this crate stays free of parsing concerns.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A single exported toll tariff line.
///
/// Immutable once constructed. `price` is kept as a decimal string exactly as
/// recognized from the source (e.g. `"22.85"`); consumers that need a number
/// parse it at their own boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TollRecord {
    /// Labeled stretch of highway, e.g. `"A1 Lisboa-Porto"`.
    pub route_segment: String,
    /// Tariff tier, e.g. `"Class 1"` for light vehicles.
    pub vehicle_type: String,
    /// Decimal price string, dot-separated.
    pub price: String,
    /// ISO 4217 currency code. Always `"EUR"` for this document family.
    pub currency: String,
    /// Tariff year or validity text, e.g. `"2025"`.
    pub validity_period: String,
    /// Which scraper/parser produced the record, e.g. `"Brisa PDF"`.
    pub source: String,
    /// ISO-8601 timestamp of the scrape/flatten invocation.
    pub scraped_at: String,
}

/// One recognized price for a route segment, before flattening.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationEntry {
    /// The owning route segment label (same string as the map key).
    pub route: String,
    /// Positionally assigned tier: the i-th price on a line or row becomes
    /// `"Class {i+1}"` regardless of any label in the source text.
    pub vehicle_class: String,
    /// Decimal price string, dot-separated.
    pub price: String,
    /// Always `"EUR"`.
    pub currency: String,
}

impl LocationEntry {
    /// Builds an entry for the `index`-th price found on a line or row,
    /// applying the positional `Class {index+1}` naming convention.
    #[must_use]
    pub fn positional(route: &str, index: usize, price: String) -> Self {
        Self {
            route: route.to_owned(),
            vehicle_class: format!("Class {}", index + 1),
            price,
            currency: "EUR".to_owned(),
        }
    }
}

/// How [`LocationMap::merge_from`] combines entries that share a key.
///
/// The PDF page aggregator uses [`MergePolicy::Overwrite`]: a location that
/// reappears on a later page replaces its earlier entries. This can drop data
/// when a segment's price list legitimately spans a page break, but it is the
/// documented behavior of this document family's parser and is kept explicit
/// here so the choice is visible and testable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergePolicy {
    /// Later entries replace earlier ones for the same key.
    Overwrite,
    /// Later entries are appended after earlier ones for the same key.
    Append,
}

/// Route-segment label → ordered recognized prices for that segment.
///
/// Key order is not meaningful; entry order within a key is (class 1 before
/// class 2, following line/column order). Built fresh per parse invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocationMap(BTreeMap<String, Vec<LocationEntry>>);

impl LocationMap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Ensures `label` exists as a key, with an empty entry list if new.
    ///
    /// A location line with no following price lines stays in the map with
    /// zero entries, mirroring the source document's layout.
    pub fn ensure_location(&mut self, label: &str) {
        self.0.entry(label.to_owned()).or_default();
    }

    /// Appends `entry` under its own `route` key, creating the key if needed.
    pub fn push_entry(&mut self, entry: LocationEntry) {
        self.0.entry(entry.route.clone()).or_default().push(entry);
    }

    /// Merges `other` into `self` key by key according to `policy`.
    pub fn merge_from(&mut self, other: LocationMap, policy: MergePolicy) {
        for (label, entries) in other.0 {
            match policy {
                MergePolicy::Overwrite => {
                    self.0.insert(label, entries);
                }
                MergePolicy::Append => {
                    self.0.entry(label).or_default().extend(entries);
                }
            }
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn get(&self, label: &str) -> Option<&[LocationEntry]> {
        self.0.get(label).map(Vec::as_slice)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Vec<LocationEntry>)> {
        self.0.iter()
    }

    /// Total number of entries across all locations.
    #[must_use]
    pub fn entry_count(&self) -> usize {
        self.0.values().map(Vec::len).sum()
    }
}

impl FromIterator<(String, Vec<LocationEntry>)> for LocationMap {
    fn from_iter<I: IntoIterator<Item = (String, Vec<LocationEntry>)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
