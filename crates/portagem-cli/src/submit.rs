//! Submission of exported records to the configured toll API.

use std::path::Path;

use portagem_api::TollApiClient;
use portagem_core::{AppConfig, TollRecord};

pub(crate) async fn run_submit(config: &AppConfig, json_path: &Path) -> anyhow::Result<()> {
    let records = portagem_export::read_exported_json(json_path)?;
    if records.is_empty() {
        println!("nothing to submit: {} holds no records", json_path.display());
        return Ok(());
    }
    submit_records(config, &records).await
}

/// Sends `records` to the API named by the config. Fails early with a clear
/// message when the API settings are absent.
pub(crate) async fn submit_records(
    config: &AppConfig,
    records: &[TollRecord],
) -> anyhow::Result<()> {
    let (base_url, token) = config.require_api()?;
    let client = TollApiClient::new(base_url, token, config.request_timeout_secs)
        .map_err(|e| anyhow::anyhow!("failed to build API client: {e}"))?;

    let receipt = client.submit_tolls(records).await?;
    tracing::info!(
        status = receipt.status_code,
        records = receipt.records_sent,
        "toll API submission accepted"
    );
    println!(
        "submitted {} records (HTTP {})",
        receipt.records_sent, receipt.status_code
    );
    Ok(())
}
