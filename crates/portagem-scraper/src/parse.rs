//! String helpers for cleaning scraped tariff cells.
//!
//! The Portugal Tolls tables wrap prices and validity text in inconsistent
//! decoration ("€ 2,35 *", "valid until 31/12/2025"); these functions
//! normalize them without caring where the text came from.

use std::sync::OnceLock;

use regex::Regex;

/// Keywords marking a cell as genuine validity text rather than decoration.
const VALIDITY_KEYWORDS: &[&str] = &["valid", "until", "expires", "current", "effective"];

fn price_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(\d+[.,]\d+|\d+)").expect("valid price regex"))
}

/// Extracts a normalized decimal price string from a scraped cell.
///
/// Strips `€`/`EUR` decoration, pulls the first numeric group (integer or
/// decimal, comma or dot separated), and normalizes the comma to a dot.
/// Returns the stripped text unchanged when no numeric group is found, and
/// an empty string for blank input — callers drop rows with empty prices.
#[must_use]
pub fn clean_price(text: &str) -> String {
    let stripped = text.trim().replace('€', "").replace("EUR", "");
    let stripped = stripped.trim();
    if stripped.is_empty() {
        return String::new();
    }

    match price_regex().find(stripped) {
        Some(m) => m.as_str().replace(',', "."),
        None => stripped.to_owned(),
    }
}

/// Returns the trimmed validity text when it contains a known validity
/// keyword (case-insensitive), or `"Current"` otherwise.
#[must_use]
pub fn extract_validity(text: &str) -> String {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return "Current".to_owned();
    }

    let lower = trimmed.to_lowercase();
    if VALIDITY_KEYWORDS
        .iter()
        .any(|keyword| lower.contains(keyword))
    {
        trimmed.to_owned()
    } else {
        "Current".to_owned()
    }
}
