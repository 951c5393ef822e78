//! Tariff PDF extraction and normalization.
//!
//! The Brisa tariff sheet lists highway segments followed by per-vehicle-class
//! prices, sometimes as free text and sometimes as space-aligned tables. This
//! crate recovers a [`portagem_core::LocationMap`] from that content:
//!
//! - [`prices`] — currency-tagged price token recognition (the leaf),
//! - [`text_lines`] — stateful line scan attaching prices to the most recent
//!   highway segment line,
//! - [`table_rows`] — per-row extraction from detected tables,
//! - [`parse`] — the page aggregator; a total function that merges both
//!   extractors over every page and substitutes [`sample::sample_data`] when
//!   nothing usable comes out,
//! - [`flatten`] — reshaping into flat [`portagem_core::TollRecord`]s,
//! - [`audit`] — timestamped JSON dump of the intermediate form.
//!
//! PDF access itself sits behind the `extract` cargo feature; see
//! [`parse::PdfCapability`].

pub mod audit;
pub mod document;
pub mod flatten;
pub mod parse;
pub mod prices;
pub mod sample;
pub mod table_rows;
pub mod text_lines;

use std::path::PathBuf;

use thiserror::Error;

pub use document::{PageContent, Table};
pub use flatten::flatten;
pub use parse::{parse_tariff_pdf, PdfCapability};
pub use sample::sample_data;

/// Failure modes of PDF access and extraction.
///
/// None of these ever escape [`parse::parse_tariff_pdf`]; they are logged at
/// the point of occurrence and converted into the sample-data fallback. They
/// do surface from the lower-level open/dump functions.
#[derive(Debug, Error)]
pub enum PdfError {
    #[error("PDF extraction backend is not compiled in (enable the `extract` feature)")]
    Unavailable,

    #[error("PDF file not found: {0}")]
    NotFound(PathBuf),

    #[error("failed to read PDF document {path}: {reason}")]
    Unreadable { path: PathBuf, reason: String },

    #[error("text extraction failed for {path}: {reason}")]
    Extraction { path: PathBuf, reason: String },

    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
