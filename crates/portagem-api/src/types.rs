//! Request and response shapes for the toll API.

use chrono::Utc;
use portagem_core::TollRecord;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Bulk payload for `PUT /api/tolls/update`.
#[derive(Debug, Serialize)]
pub struct TollUpdateRequest {
    pub tolls: Vec<TollPayload>,
    /// ISO-8601 timestamp of this submission.
    pub scraped_at: String,
    pub total_records: usize,
}

impl TollUpdateRequest {
    /// Formats export records into the API shape, stamping the submission
    /// time once for the whole batch.
    #[must_use]
    pub fn from_records(records: &[TollRecord]) -> Self {
        let tolls: Vec<TollPayload> = records.iter().map(TollPayload::from_record).collect();
        Self {
            total_records: tolls.len(),
            scraped_at: Utc::now().to_rfc3339(),
            tolls,
        }
    }
}

/// One toll record in API form.
///
/// Unlike [`TollRecord`], `price` is a decimal: the API stores and compares
/// numbers, not display strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TollPayload {
    pub route_segment: String,
    pub vehicle_type: String,
    pub price: Decimal,
    pub currency: String,
    pub validity_period: String,
    pub source: String,
    pub scraped_at: String,
}

impl TollPayload {
    /// Converts an export record, defaulting blank fields the same way the
    /// API expects: empty vehicle type → `"Class 1"`, empty or unparseable
    /// price → `0`.
    #[must_use]
    pub fn from_record(record: &TollRecord) -> Self {
        Self {
            route_segment: record.route_segment.clone(),
            vehicle_type: if record.vehicle_type.is_empty() {
                "Class 1".to_owned()
            } else {
                record.vehicle_type.clone()
            },
            price: parse_price(&record.price),
            currency: if record.currency.is_empty() {
                "EUR".to_owned()
            } else {
                record.currency.clone()
            },
            validity_period: record.validity_period.clone(),
            source: record.source.clone(),
            scraped_at: record.scraped_at.clone(),
        }
    }
}

/// Parses a display price into a decimal, stripping currency decoration and
/// normalizing the comma separator. Unparseable input becomes `0` — a bad
/// price should not sink a batch of hundreds of good records.
fn parse_price(price: &str) -> Decimal {
    let cleaned = price.replace('€', "").replace("EUR", "").replace(',', ".");
    cleaned.trim().parse::<Decimal>().unwrap_or(Decimal::ZERO)
}

/// Outcome of a successful submission.
#[derive(Debug)]
pub struct SubmitReceipt {
    pub status_code: u16,
    pub records_sent: usize,
    /// ISO-8601 timestamp taken after the API acknowledged the batch.
    pub sent_at: String,
    /// The API's response body, kept loosely typed — the server's envelope
    /// is not under this crate's control.
    pub response: serde_json::Value,
}
