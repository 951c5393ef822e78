//! Recognition of currency-tagged price tokens in tariff text.
//!
//! A token is a price candidate iff it carries the `€` marker; everything
//! else on a line is ignored. Cleaning strips the marker (and any `EUR`
//! literal), normalizes the Portuguese comma decimal separator to a dot, and
//! keeps the cleaned *string* — not a parsed float — so downstream export
//! reproduces the source value exactly.

use rust_decimal::Decimal;

/// Returns the decimal price strings embedded in `line`, in left-to-right
/// order.
///
/// The line is split on whitespace; each token containing `€` is cleaned via
/// the shared cleaning rule and kept only if the remainder parses as a
/// non-negative decimal. Tokens that carry the marker but no usable number
/// (stray symbols, ranges, footnote daggers) are dropped silently — they are
/// expected noise in extracted PDF text, not errors.
#[must_use]
pub fn recognize_prices(line: &str) -> Vec<String> {
    line.split_whitespace()
        .filter(|token| token.contains('€'))
        .filter_map(clean_token)
        .collect()
}

/// Cleans a single table cell holding one currency-tagged value.
///
/// Returns `None` when the cell has no `€` marker or its remainder does not
/// parse as a non-negative decimal.
#[must_use]
pub fn clean_price_cell(cell: &str) -> Option<String> {
    if !cell.contains('€') {
        return None;
    }
    clean_token(cell)
}

/// Shared cleaning rule: strip `€` and `EUR`, comma → dot, trim, then
/// validate as a non-negative decimal. Keeps the cleaned string on success.
fn clean_token(token: &str) -> Option<String> {
    let cleaned = token.replace('€', "").replace("EUR", "").replace(',', ".");
    let cleaned = cleaned.trim();
    let value = cleaned.parse::<Decimal>().ok()?;
    if value.is_sign_negative() {
        return None;
    }
    Some(cleaned.to_owned())
}
