//! Client for the downstream toll API.
//!
//! Scraped tariffs are pushed with a single bulk `PUT /api/tolls/update`
//! carrying a bearer token. Prices travel as decimals rather than the
//! free-form strings used in exports; unparseable prices degrade to `0`
//! instead of failing the whole submission.

pub mod client;
pub mod error;
pub mod types;

pub use client::TollApiClient;
pub use error::ApiError;
pub use types::{SubmitReceipt, TollPayload, TollUpdateRequest};
