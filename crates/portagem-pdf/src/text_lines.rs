//! Stateful line scan over a page's extracted text.
//!
//! Tariff sheets list a highway/segment header line followed by one or more
//! price lines. A single pass with a "current location" pointer captures that
//! layout without needing full table structure: segment lines update the
//! pointer, price lines attach to whatever segment is current, and everything
//! else is ignored.

use portagem_core::{LocationEntry, LocationMap};

use crate::prices;

/// Highway codes recognized in free text. Any line containing one of these
/// as a substring becomes the current location.
///
/// Deliberately wider than [`crate::table_rows::TABLE_HIGHWAY_PREFIXES`];
/// the two sets are kept separate on purpose (see DESIGN.md).
pub const TEXT_HIGHWAY_PREFIXES: &[&str] = &["A1", "A2", "A3", "A4", "A5", "A6", "A7", "A8", "A9"];

/// Extracts a [`LocationMap`] from one page's linear text.
///
/// Rules, applied per trimmed line in order:
/// 1. A line containing any prefix from `prefixes` becomes the current
///    location; its full trimmed text is the map key. The key exists even if
///    no price line follows before the next location line.
/// 2. Otherwise, a line containing `€` while a location is current has its
///    recognized prices appended positionally (`Class 1`, `Class 2`, ... in
///    left-to-right order).
/// 3. Anything else is ignored. A price line before the first location line
///    attaches to nothing and is dropped.
#[must_use]
pub fn extract_from_text(text: &str, prefixes: &[&str]) -> LocationMap {
    let mut map = LocationMap::new();
    let mut current_location: Option<String> = None;

    for line in text.lines() {
        let line = line.trim();

        if prefixes.iter().any(|prefix| line.contains(prefix)) {
            current_location = Some(line.to_owned());
            map.ensure_location(line);
        } else if line.contains('€') {
            if let Some(location) = current_location.as_deref() {
                for (i, price) in prices::recognize_prices(line).into_iter().enumerate() {
                    map.push_entry(LocationEntry::positional(location, i, price));
                }
            }
        }
    }

    map
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(text: &str) -> LocationMap {
        extract_from_text(text, TEXT_HIGHWAY_PREFIXES)
    }

    #[test]
    fn attaches_prices_to_preceding_location() {
        let text = "A1 Lisboa-Porto\n€22.85 €34.25\nA2 Lisboa-Algarve\n€18.60\n";
        let map = extract(text);

        assert_eq!(map.len(), 2);

        let a1 = map.get("A1 Lisboa-Porto").unwrap();
        assert_eq!(a1.len(), 2);
        assert_eq!(a1[0].vehicle_class, "Class 1");
        assert_eq!(a1[0].price, "22.85");
        assert_eq!(a1[1].vehicle_class, "Class 2");
        assert_eq!(a1[1].price, "34.25");

        let a2 = map.get("A2 Lisboa-Algarve").unwrap();
        assert_eq!(a2.len(), 1);
        assert_eq!(a2[0].price, "18.60");
    }

    #[test]
    fn price_line_before_any_location_is_dropped() {
        let map = extract("€10.00\nA1 X\n");
        assert_eq!(map.len(), 1);
        assert_eq!(map.get("A1 X"), Some(&[][..]));
    }

    #[test]
    fn location_with_no_price_lines_keeps_empty_entry_list() {
        let map = extract("A7 Norte\nsome footnote\n");
        assert_eq!(map.get("A7 Norte"), Some(&[][..]));
    }

    #[test]
    fn entries_carry_the_owning_route() {
        let map = extract("A3 Porto-Valença\n€8,45\n");
        let entries = map.get("A3 Porto-Valença").unwrap();
        assert_eq!(entries[0].route, "A3 Porto-Valença");
        assert_eq!(entries[0].price, "8.45");
        assert_eq!(entries[0].currency, "EUR");
    }

    #[test]
    fn consecutive_price_lines_restart_class_numbering() {
        // Each price line starts counting at Class 1 again; the map keeps
        // entries in encounter order.
        let map = extract("A1 X\n€1.00 €2.00\n€3.00\n");
        let entries = map.get("A1 X").unwrap();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[2].vehicle_class, "Class 1");
        assert_eq!(entries[2].price, "3.00");
    }

    #[test]
    fn lines_matching_neither_rule_are_ignored() {
        let map = extract("Tarifas de portagem\nem vigor\n");
        assert!(map.is_empty());
    }

    #[test]
    fn later_location_line_switches_the_pointer() {
        let map = extract("A1 X\nA2 Y\n€5.00\n");
        assert_eq!(map.get("A1 X"), Some(&[][..]));
        assert_eq!(map.get("A2 Y").unwrap().len(), 1);
    }

    #[test]
    fn whole_line_is_trimmed_before_becoming_the_key() {
        let map = extract("   A5 Lisboa-Cascais  \n€1,55\n");
        assert!(map.get("A5 Lisboa-Cascais").is_some());
    }
}
