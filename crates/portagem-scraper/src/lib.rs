//! HTTP scrapers for the two public tariff sources.
//!
//! [`brisa`] locates and downloads the yearly tariff PDF from the Brisa
//! concession site (the PDF itself is parsed by `portagem-pdf`).
//! [`portugal_tolls`] reads the Portugal Tolls tariff page's HTML price
//! tables directly into [`portagem_core::TollRecord`]s.
//!
//! Both run over plain HTTP fetches of the rendered pages; there is no
//! browser automation layer.

pub mod brisa;
pub mod client;
pub mod error;
pub mod parse;
pub mod portugal_tolls;
mod retry;

pub use brisa::BrisaScrape;
pub use client::TariffClient;
pub use error::ScrapeError;
