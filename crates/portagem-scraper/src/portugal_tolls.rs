//! Portugal Tolls scraper: reads the tariff page's HTML price tables.
//!
//! Unlike Brisa, this source publishes tariffs directly in the page, so rows
//! become [`TollRecord`]s without an intermediate form. Row shape varies
//! between tables; the price is taken from the second-to-last cell and the
//! validity text from the last, which holds across the observed layouts.

use chrono::Utc;
use portagem_core::TollRecord;
use scraper::{ElementRef, Html, Selector};

use crate::client::TariffClient;
use crate::error::ScrapeError;
use crate::parse::{clean_price, extract_validity};

const SOURCE_LABEL: &str = "Portugal Tolls";

/// Fetches the tariff page and extracts all usable rows.
///
/// # Errors
///
/// Returns [`ScrapeError::Http`] / [`ScrapeError::UnexpectedStatus`] from
/// the page fetch. An empty result is not an error — the caller decides
/// whether to fall back to another source.
pub async fn scrape(client: &TariffClient, page_url: &str) -> Result<Vec<TollRecord>, ScrapeError> {
    tracing::info!(url = page_url, "fetching Portugal Tolls tariff page");
    let html = client.fetch_html(page_url).await?;

    let tariffs = extract_tariffs(&html);
    tracing::info!(records = tariffs.len(), "Portugal Tolls scrape finished");
    Ok(tariffs)
}

/// Extracts tariff records from the page HTML.
///
/// Looks at every element matching `table, .tariff-table, .price-table`,
/// skips each table's first row as a header, and keeps rows with at least
/// three cells whose route and cleaned price are both non-empty.
#[must_use]
pub fn extract_tariffs(html: &str) -> Vec<TollRecord> {
    let document = Html::parse_document(html);
    let tables = Selector::parse("table, .tariff-table, .price-table").expect("valid table selector");
    let rows = Selector::parse("tr").expect("valid row selector");
    let cells = Selector::parse("td").expect("valid cell selector");

    let scraped_at = Utc::now().to_rfc3339();
    let mut tariffs = Vec::new();

    for table in document.select(&tables) {
        for row in table.select(&rows).skip(1) {
            let texts: Vec<String> = row.select(&cells).map(cell_text).collect();
            if texts.len() < 3 {
                continue;
            }

            let route_segment = texts[0].clone();
            let vehicle_type = if texts[1].is_empty() {
                "Standard".to_owned()
            } else {
                texts[1].clone()
            };
            let price = clean_price(&texts[texts.len() - 2]);
            let validity_period = extract_validity(&texts[texts.len() - 1]);

            if route_segment.is_empty() || price.is_empty() {
                continue;
            }

            tariffs.push(TollRecord {
                route_segment,
                vehicle_type,
                price,
                currency: "EUR".to_owned(),
                validity_period,
                source: SOURCE_LABEL.to_owned(),
                scraped_at: scraped_at.clone(),
            });
        }
    }

    tariffs
}

fn cell_text(cell: ElementRef<'_>) -> String {
    cell.text().collect::<Vec<_>>().join("").trim().to_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"
        <html><body>
          <table>
            <tr><th>Route</th><th>Class</th><th>Price</th><th>Validity</th></tr>
            <tr><td>A1 Lisboa-Porto</td><td>Class 1</td><td>€ 22,85</td><td>valid until 31/12/2025</td></tr>
            <tr><td>A2 Lisboa-Algarve</td><td>Class 1</td><td>€ 18,60</td><td>—</td></tr>
            <tr><td></td><td>Class 2</td><td>€ 27,90</td><td>—</td></tr>
            <tr><td>A9 CREL</td><td></td><td>—</td></tr>
          </table>
        </body></html>
    "#;

    #[test]
    fn extracts_rows_with_route_and_price() {
        let tariffs = extract_tariffs(PAGE);
        assert_eq!(tariffs.len(), 2);

        assert_eq!(tariffs[0].route_segment, "A1 Lisboa-Porto");
        assert_eq!(tariffs[0].vehicle_type, "Class 1");
        assert_eq!(tariffs[0].price, "22.85");
        assert_eq!(tariffs[0].validity_period, "valid until 31/12/2025");
        assert_eq!(tariffs[0].source, "Portugal Tolls");
        assert_eq!(tariffs[0].currency, "EUR");
    }

    #[test]
    fn row_without_route_is_dropped() {
        let tariffs = extract_tariffs(PAGE);
        assert!(tariffs.iter().all(|t| !t.route_segment.is_empty()));
    }

    #[test]
    fn validity_without_keyword_defaults_to_current() {
        let tariffs = extract_tariffs(PAGE);
        assert_eq!(tariffs[1].route_segment, "A2 Lisboa-Algarve");
        assert_eq!(tariffs[1].validity_period, "Current");
    }

    #[test]
    fn short_rows_are_skipped() {
        let html = r"
            <table>
              <tr><th>Route</th><th>Price</th></tr>
              <tr><td>A3 Porto</td><td>€ 8,45</td></tr>
            </table>
        ";
        assert!(extract_tariffs(html).is_empty());
    }

    #[test]
    fn header_row_is_skipped_even_without_thead() {
        let html = r"
            <table>
              <tr><td>Route</td><td>Class</td><td>Price</td><td>When</td></tr>
              <tr><td>A4 Transmontana</td><td>Class 1</td><td>€ 3,10</td><td>current</td></tr>
            </table>
        ";
        let tariffs = extract_tariffs(html);
        assert_eq!(tariffs.len(), 1);
        assert_eq!(tariffs[0].route_segment, "A4 Transmontana");
    }

    #[test]
    fn classed_table_is_not_double_counted() {
        // Matches both the bare `table` selector and `.price-table`; rows
        // must still come out once.
        let html = r#"
            <table class="price-table">
              <tr><td>h</td><td>h</td><td>h</td><td>h</td></tr>
              <tr><td>A5 Oeste</td><td>Class 1</td><td>€ 1,55</td><td>current</td></tr>
            </table>
        "#;
        let tariffs = extract_tariffs(html);
        assert_eq!(tariffs.len(), 1);
        assert_eq!(tariffs[0].price, "1.55");
    }

    #[test]
    fn empty_vehicle_cell_defaults_to_standard() {
        let html = r"
            <table>
              <tr><td>Route</td><td>Class</td><td>Price</td><td>When</td></tr>
              <tr><td>A6 Marateca</td><td></td><td>€ 9,00</td><td>current</td></tr>
            </table>
        ";
        let tariffs = extract_tariffs(html);
        assert_eq!(tariffs[0].vehicle_type, "Standard");
    }

    #[test]
    fn page_without_tables_yields_nothing() {
        assert!(extract_tariffs("<html><body><p>no tariffs</p></body></html>").is_empty());
    }
}
