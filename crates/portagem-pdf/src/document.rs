//! Page-level document abstraction and the `extract`-feature PDF reader.
//!
//! The extractors and the aggregator only ever see [`PageContent`]; how pages
//! are obtained is this module's concern. The real reader combines `lopdf`
//! (page count) with `pdf-extract` (full text), chunks the text into
//! per-page line ranges, and detects space-aligned tables inside each chunk.
//! Tests construct [`PageContent`] values directly.

/// A detected table: ordered rows of optional cell strings. `None` models a
/// null cell reported by the table source.
pub type Table = Vec<Vec<Option<String>>>;

/// Extractable content of one document page.
#[derive(Debug, Clone, Default)]
pub struct PageContent {
    /// The page's linear text, if any could be extracted.
    pub text: Option<String>,
    /// Tables detected on the page, in reading order.
    pub tables: Vec<Table>,
}

#[cfg(feature = "extract")]
pub use reader::TariffPdf;

#[cfg(feature = "extract")]
mod reader {
    use std::path::Path;

    use super::{detect_tables, split_pages, PageContent};
    use crate::PdfError;

    /// A tariff PDF opened for extraction.
    pub struct TariffPdf {
        pages: Vec<PageContent>,
    }

    impl TariffPdf {
        /// Opens `path` and extracts per-page content.
        ///
        /// # Errors
        ///
        /// - [`PdfError::NotFound`] when `path` does not exist.
        /// - [`PdfError::Unreadable`] when the file is not a loadable PDF.
        /// - [`PdfError::Extraction`] when text extraction fails.
        pub fn open(path: &Path) -> Result<Self, PdfError> {
            if !path.exists() {
                return Err(PdfError::NotFound(path.to_owned()));
            }
            let bytes = std::fs::read(path)?;

            let document =
                lopdf::Document::load_mem(&bytes).map_err(|e| PdfError::Unreadable {
                    path: path.to_owned(),
                    reason: e.to_string(),
                })?;
            let page_count = document.get_pages().len();

            let text = pdf_extract::extract_text_from_mem(&bytes).map_err(|e| {
                PdfError::Extraction {
                    path: path.to_owned(),
                    reason: e.to_string(),
                }
            })?;

            let pages = split_pages(&text, page_count)
                .into_iter()
                .map(|page_text| PageContent {
                    tables: detect_tables(&page_text),
                    text: Some(page_text),
                })
                .collect();

            Ok(Self { pages })
        }

        #[must_use]
        pub fn pages(&self) -> &[PageContent] {
            &self.pages
        }
    }
}

/// Splits extracted full-document text into `page_count` chunks of whole
/// lines.
///
/// Plain-text extraction loses page boundaries, so the split is an even
/// line-count partition — adequate for this document family, where segment
/// headers and their price lines sit close together.
fn split_pages(text: &str, page_count: usize) -> Vec<String> {
    let lines: Vec<&str> = text.lines().collect();
    if page_count <= 1 || lines.is_empty() {
        return vec![text.to_owned()];
    }

    let per_page = lines.len().div_ceil(page_count);
    lines
        .chunks(per_page)
        .map(|chunk| chunk.join("\n"))
        .collect()
}

/// Detects space-aligned tables in a page's text.
///
/// A line is columnar when it splits into at least two cells on runs of two
/// or more spaces. Two or more consecutive columnar lines form one table; a
/// lone columnar line stays in the text path only.
fn detect_tables(page_text: &str) -> Vec<Table> {
    let mut tables = Vec::new();
    let mut current: Table = Vec::new();

    for line in page_text.lines() {
        let cells = split_columns(line);
        if cells.len() >= 2 {
            current.push(cells);
        } else {
            flush_table(&mut current, &mut tables);
        }
    }
    flush_table(&mut current, &mut tables);

    tables
}

/// Moves `current` into `tables` when it holds a real table (≥2 rows).
fn flush_table(current: &mut Table, tables: &mut Vec<Table>) {
    if current.len() >= 2 {
        tables.push(std::mem::take(current));
    } else {
        current.clear();
    }
}

/// Splits a line into trimmed cells on runs of two or more spaces.
fn split_columns(line: &str) -> Vec<Option<String>> {
    line.split("  ")
        .map(str::trim)
        .filter(|cell| !cell.is_empty())
        .map(|cell| Some(cell.to_owned()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_pages_partitions_lines_evenly() {
        let text = "l1\nl2\nl3\nl4";
        let pages = split_pages(text, 2);
        assert_eq!(pages, vec!["l1\nl2", "l3\nl4"]);
    }

    #[test]
    fn split_pages_single_page_returns_whole_text() {
        let text = "l1\nl2";
        assert_eq!(split_pages(text, 1), vec!["l1\nl2"]);
    }

    #[test]
    fn split_pages_more_pages_than_lines() {
        let pages = split_pages("only", 3);
        assert_eq!(pages.len(), 1);
        assert_eq!(pages[0], "only");
    }

    #[test]
    fn split_columns_breaks_on_space_runs() {
        let cells = split_columns("A1 Lisboa-Porto   €22,85  €34,25");
        assert_eq!(
            cells,
            vec![
                Some("A1 Lisboa-Porto".to_owned()),
                Some("€22,85".to_owned()),
                Some("€34,25".to_owned()),
            ]
        );
    }

    #[test]
    fn split_columns_keeps_single_spaced_text_together() {
        let cells = split_columns("A1 Lisboa-Porto €22,85");
        assert_eq!(cells.len(), 1);
    }

    #[test]
    fn detect_tables_groups_consecutive_columnar_lines() {
        let text = "Tarifas 2025\nRoute  C1  C2\nA1 Norte  €5,00  €7,50\nA2 Sul  €3,00  €4,50\nfootnote\n";
        let tables = detect_tables(text);
        assert_eq!(tables.len(), 1);
        assert_eq!(tables[0].len(), 3);
        assert_eq!(tables[0][1][0].as_deref(), Some("A1 Norte"));
        assert_eq!(tables[0][1][2].as_deref(), Some("€7,50"));
    }

    #[test]
    fn detect_tables_ignores_a_lone_columnar_line() {
        let tables = detect_tables("plain\nA1  €5,00\nplain\n");
        assert!(tables.is_empty());
    }

    #[test]
    fn detect_tables_finds_separate_tables() {
        let text = "R  C1\nA1 X  €1,00\n\ntext between\n\nR  C1\nA2 Y  €2,00\n";
        let tables = detect_tables(text);
        assert_eq!(tables.len(), 2);
    }
}
