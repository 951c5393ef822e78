//! Per-row extraction from a detected tariff table.
//!
//! Row 0 is assumed to be a header and skipped. Cell 0 names the route
//! segment; each later cell holding a `€` value contributes one positional
//! vehicle-class entry. Class numbering follows the cell index, so a gap cell
//! shifts the class of whatever follows it — inherited behavior, preserved
//! (see DESIGN.md).

use portagem_core::{LocationEntry, LocationMap};

use crate::document::Table;
use crate::prices;

/// Highway codes accepted in a table's location column.
///
/// Narrower than [`crate::text_lines::TEXT_HIGHWAY_PREFIXES`] (A1–A5 only);
/// kept as a distinct set rather than unified (see DESIGN.md).
pub const TABLE_HIGHWAY_PREFIXES: &[&str] = &["A1", "A2", "A3", "A4", "A5"];

/// Extracts a [`LocationMap`] from one table.
///
/// Tables with at most one row (header only, or empty) yield an empty map.
/// Rows are skipped when they have fewer than two cells, when cell 0 is
/// absent or blank, or when cell 0 contains no prefix from `prefixes`.
/// Accepted rows always create their location key, even if no cell yields a
/// parseable price.
#[must_use]
pub fn extract_from_table(table: &Table, prefixes: &[&str]) -> LocationMap {
    let mut map = LocationMap::new();

    if table.len() <= 1 {
        return map;
    }

    for row in &table[1..] {
        if row.len() < 2 {
            continue;
        }

        let Some(location) = row[0].as_deref().map(str::trim).filter(|s| !s.is_empty()) else {
            continue;
        };
        if !prefixes.iter().any(|prefix| location.contains(prefix)) {
            continue;
        }

        map.ensure_location(location);

        for (i, cell) in row[1..].iter().enumerate() {
            let Some(cell) = cell.as_deref() else {
                continue;
            };
            if let Some(price) = prices::clean_price_cell(cell) {
                map.push_entry(LocationEntry::positional(location, i, price));
            }
        }
    }

    map
}
