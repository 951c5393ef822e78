//! Retry with exponential backoff for transient fetch errors.
//!
//! Network-level failures and throttling/server statuses are retried;
//! everything else (4xx, missing links, save failures) is propagated
//! immediately.

use std::future::Future;
use std::time::Duration;

use crate::error::ScrapeError;

/// Returns `true` if `err` represents a transient condition worth retrying.
///
/// Retriable:
/// - [`ScrapeError::Http`] — connection reset, timeout, TLS hiccup.
/// - [`ScrapeError::UnexpectedStatus`] with 429 or a 5xx status.
///
/// Everything else is deterministic and propagated immediately.
fn is_retriable(err: &ScrapeError) -> bool {
    match err {
        ScrapeError::Http(_) => true,
        ScrapeError::UnexpectedStatus { status, .. } => *status == 429 || *status >= 500,
        _ => false,
    }
}

/// Executes `operation` with exponential backoff retries on transient errors.
///
/// Sleeps `backoff_base_secs * 2^attempt` seconds between attempts, up to
/// `max_retries` additional attempts after the first. The last error is
/// returned once retries are exhausted.
pub(crate) async fn retry_with_backoff<T, F, Fut>(
    max_retries: u32,
    backoff_base_secs: u64,
    mut operation: F,
) -> Result<T, ScrapeError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, ScrapeError>>,
{
    let mut attempt = 0u32;

    loop {
        let err = match operation().await {
            Ok(value) => return Ok(value),
            Err(err) => {
                if !is_retriable(&err) || attempt >= max_retries {
                    return Err(err);
                }
                err
            }
        };

        // Cap the shift to keep the multiplication well-defined on extreme configs.
        let delay_secs = backoff_base_secs.saturating_mul(1u64 << attempt.min(62));
        tracing::warn!(
            attempt,
            max_retries,
            delay_secs,
            error = %err,
            "transient fetch error — retrying after backoff"
        );
        tokio::time::sleep(Duration::from_secs(delay_secs)).await;
        attempt += 1;
    }
}
