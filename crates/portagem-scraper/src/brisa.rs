//! Brisa concession scraper: finds and downloads the yearly tariff PDF.
//!
//! The toll-rates page carries a download link for the current year's rate
//! sheet. The link text changes slightly between years, so discovery tries
//! the exact phrasing first and falls back to any anchor mentioning a
//! download or the tariff year.

use std::path::{Path, PathBuf};

use chrono::Utc;
use portagem_core::TollRecord;
use scraper::{Html, Selector};

use crate::client::TariffClient;
use crate::error::ScrapeError;

/// Result of a successful Brisa scrape.
#[derive(Debug)]
pub struct BrisaScrape {
    /// Absolute URL the PDF was downloaded from.
    pub pdf_url: String,
    /// Where the PDF was saved locally.
    pub pdf_path: PathBuf,
    /// The marker record noting that tariff detail lives in the PDF; the
    /// real per-segment records come from parsing `pdf_path`.
    pub placeholder: TollRecord,
}

/// Fetches the toll-rates page, locates the tariff PDF, downloads it into
/// `pdf_dir`, and returns the saved path plus a marker record.
///
/// # Errors
///
/// - [`ScrapeError::PdfLinkNotFound`] when no candidate anchor exists.
/// - [`ScrapeError::InvalidPdfLink`] when the href cannot be resolved to an
///   absolute URL.
/// - [`ScrapeError::Save`] when the PDF cannot be written to disk.
/// - [`ScrapeError::Http`] / [`ScrapeError::UnexpectedStatus`] from the
///   underlying fetches.
pub async fn scrape(
    client: &TariffClient,
    page_url: &str,
    pdf_dir: &Path,
    tariff_year: &str,
) -> Result<BrisaScrape, ScrapeError> {
    tracing::info!(url = page_url, "fetching Brisa toll-rates page");
    let html = client.fetch_html(page_url).await?;

    let href = find_pdf_link(&html, tariff_year).ok_or_else(|| ScrapeError::PdfLinkNotFound {
        url: page_url.to_owned(),
    })?;
    let pdf_url = resolve_link(&href, page_url)?;
    tracing::info!(url = %pdf_url, "found tariff PDF link");

    let bytes = client.download(&pdf_url).await?;
    let pdf_path = save_pdf(&bytes, pdf_dir, tariff_year)?;
    tracing::info!(path = %pdf_path.display(), size = bytes.len(), "tariff PDF downloaded");

    let placeholder = placeholder_record(&pdf_path, tariff_year);
    Ok(BrisaScrape {
        pdf_url,
        pdf_path,
        placeholder,
    })
}

/// Scans page HTML for the tariff PDF link.
///
/// Prefers an anchor whose text carries the page's exact download phrasing
/// for `tariff_year`; otherwise falls back to the first anchor mentioning
/// "download" or the year. Returns the raw `href`, which may be relative.
#[must_use]
pub fn find_pdf_link(html: &str, tariff_year: &str) -> Option<String> {
    let document = Html::parse_document(html);
    let anchors = Selector::parse("a[href]").expect("valid anchor selector");
    let exact_phrase = format!("Click here to download the rates for {tariff_year}");

    let mut fallback: Option<String> = None;
    for anchor in document.select(&anchors) {
        let Some(href) = anchor.value().attr("href") else {
            continue;
        };
        let text = anchor.text().collect::<Vec<_>>().join("");
        let text = text.trim();

        if text.contains(&exact_phrase) {
            return Some(href.to_owned());
        }
        if fallback.is_none() && (text.contains("download") || text.contains(tariff_year)) {
            fallback = Some(href.to_owned());
        }
    }
    fallback
}

/// Resolves a possibly-relative `href` against the page it came from.
fn resolve_link(href: &str, base: &str) -> Result<String, ScrapeError> {
    let base_url = reqwest::Url::parse(base).map_err(|e| ScrapeError::InvalidPdfLink {
        href: href.to_owned(),
        base: base.to_owned(),
        reason: e.to_string(),
    })?;
    let resolved = base_url.join(href).map_err(|e| ScrapeError::InvalidPdfLink {
        href: href.to_owned(),
        base: base.to_owned(),
        reason: e.to_string(),
    })?;
    Ok(resolved.to_string())
}

/// Writes the PDF bytes under `dir` with a timestamped name, creating the
/// directory if needed.
fn save_pdf(bytes: &[u8], dir: &Path, tariff_year: &str) -> Result<PathBuf, ScrapeError> {
    std::fs::create_dir_all(dir).map_err(|e| ScrapeError::Save {
        path: dir.to_owned(),
        source: e,
    })?;

    let filename = format!(
        "brisa_toll_rates_{tariff_year}_{}.pdf",
        Utc::now().format("%Y%m%d_%H%M%S")
    );
    let path = dir.join(filename);
    std::fs::write(&path, bytes).map_err(|e| ScrapeError::Save {
        path: path.clone(),
        source: e,
    })?;
    Ok(path)
}

/// The record emitted alongside the download so exports show the PDF was
/// fetched even before parsing runs.
fn placeholder_record(pdf_path: &Path, tariff_year: &str) -> TollRecord {
    let file_name = pdf_path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    TollRecord {
        route_segment: "PDF Downloaded".to_owned(),
        vehicle_type: "All Classes".to_owned(),
        price: "See PDF".to_owned(),
        currency: "EUR".to_owned(),
        validity_period: tariff_year.to_owned(),
        source: format!("Brisa PDF: {file_name}"),
        scraped_at: Utc::now().to_rfc3339(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_the_exact_download_phrase() {
        let html = r#"
            <html><body>
              <a href="/about">About us</a>
              <a href="/docs/rates-2025.pdf">Click here to download the rates for 2025</a>
            </body></html>
        "#;
        assert_eq!(
            find_pdf_link(html, "2025").as_deref(),
            Some("/docs/rates-2025.pdf")
        );
    }

    #[test]
    fn falls_back_to_an_anchor_mentioning_download() {
        let html = r#"<a href="/files/tarifas.pdf">download tariff sheet</a>"#;
        assert_eq!(
            find_pdf_link(html, "2025").as_deref(),
            Some("/files/tarifas.pdf")
        );
    }

    #[test]
    fn falls_back_to_an_anchor_mentioning_the_year() {
        let html = r#"<a href="/files/2025.pdf">Rates 2025</a>"#;
        assert_eq!(find_pdf_link(html, "2025").as_deref(), Some("/files/2025.pdf"));
    }

    #[test]
    fn exact_phrase_wins_over_an_earlier_fallback() {
        let html = r#"
            <a href="/old/2024.pdf">download archive</a>
            <a href="/new/2025.pdf">Click here to download the rates for 2025</a>
        "#;
        assert_eq!(find_pdf_link(html, "2025").as_deref(), Some("/new/2025.pdf"));
    }

    #[test]
    fn returns_none_when_nothing_matches() {
        let html = r#"<a href="/about">About us</a>"#;
        assert!(find_pdf_link(html, "2025").is_none());
    }

    #[test]
    fn resolves_relative_links_against_the_page() {
        let url = resolve_link("/docs/rates.pdf", "https://www.brisaconcessao.pt/en/tolls").unwrap();
        assert_eq!(url, "https://www.brisaconcessao.pt/docs/rates.pdf");
    }

    #[test]
    fn keeps_absolute_links_as_is() {
        let url = resolve_link(
            "https://cdn.example.pt/rates.pdf",
            "https://www.brisaconcessao.pt/en/tolls",
        )
        .unwrap();
        assert_eq!(url, "https://cdn.example.pt/rates.pdf");
    }

    #[test]
    fn placeholder_record_points_at_the_saved_file() {
        let record = placeholder_record(Path::new("data/pdfs/brisa_toll_rates_2025_x.pdf"), "2025");
        assert_eq!(record.route_segment, "PDF Downloaded");
        assert_eq!(record.vehicle_type, "All Classes");
        assert_eq!(record.price, "See PDF");
        assert_eq!(record.validity_period, "2025");
        assert_eq!(record.source, "Brisa PDF: brisa_toll_rates_2025_x.pdf");
    }

    #[test]
    fn save_pdf_writes_a_timestamped_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = save_pdf(b"%PDF-1.4 fake", dir.path(), "2025").unwrap();
        let name = path.file_name().unwrap().to_str().unwrap();
        assert!(name.starts_with("brisa_toll_rates_2025_"));
        assert!(name.ends_with(".pdf"));
        assert_eq!(std::fs::read(&path).unwrap(), b"%PDF-1.4 fake");
    }
}
