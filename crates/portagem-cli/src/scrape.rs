//! The full scrape pipeline.
//!
//! Brisa first: download the tariff PDF, parse it, flatten the result. Only
//! when that produces nothing does the Portugal Tolls page scrape run as the
//! fallback source. Per-source failures are logged and skipped rather than
//! propagated so one unreachable site does not abort the run.

use portagem_core::{AppConfig, TollRecord};
use portagem_scraper::{portugal_tolls, TariffClient};

use crate::submit::submit_records;

pub(crate) async fn run_scrape(
    config: &AppConfig,
    submit: bool,
    dry_run: bool,
) -> anyhow::Result<()> {
    if dry_run {
        println!("dry-run: would scrape the following sources:");
        println!("  Brisa:          {}", config.brisa_url);
        println!("  Portugal Tolls: {}", config.portugal_tolls_url);
        return Ok(());
    }

    setup_directories(config)?;

    let client = TariffClient::new(
        config.request_timeout_secs,
        &config.user_agent,
        config.max_retries,
        config.retry_backoff_base_secs,
    )
    .map_err(|e| anyhow::anyhow!("failed to build HTTP client: {e}"))?;

    let mut all_tariffs: Vec<TollRecord> = Vec::new();

    tracing::info!("attempting Brisa scraper");
    match portagem_scraper::brisa::scrape(
        &client,
        &config.brisa_url,
        &config.pdf_dir,
        &config.tariff_year,
    )
    .await
    {
        Ok(result) => {
            tracing::info!(path = %result.pdf_path.display(), "parsing tariff PDF");
            let location_data = portagem_pdf::parse_tariff_pdf(&result.pdf_path);

            if let Err(e) =
                portagem_pdf::audit::save_location_data(&location_data, &config.parsed_dir)
            {
                tracing::warn!(error = %e, "failed to write location audit dump");
            }

            all_tariffs.extend(portagem_pdf::flatten(
                &location_data,
                &config.tariff_year,
                "Brisa PDF",
            ));
            all_tariffs.push(result.placeholder);
            tracing::info!(records = all_tariffs.len(), "Brisa scraper completed");
        }
        Err(e) => {
            eprintln!("error: Brisa scraper failed: {e}");
        }
    }

    if all_tariffs.is_empty() {
        tracing::info!("using fallback: Portugal Tolls scraper");
        match portugal_tolls::scrape(&client, &config.portugal_tolls_url).await {
            Ok(records) => {
                tracing::info!(records = records.len(), "Portugal Tolls scraper completed");
                all_tariffs.extend(records);
            }
            Err(e) => {
                eprintln!("error: Portugal Tolls scraper failed: {e}");
            }
        }
    }

    if all_tariffs.is_empty() {
        println!("no toll data was scraped");
        return Ok(());
    }

    let csv_path = portagem_export::export_to_csv(&all_tariffs, &config.exports_dir, None)?;
    let json_path = portagem_export::export_to_json(&all_tariffs, &config.exports_dir, None)?;

    println!("scraping completed: {} records processed", all_tariffs.len());
    println!("  CSV:  {}", csv_path.display());
    println!("  JSON: {}", json_path.display());

    if submit {
        submit_records(config, &all_tariffs).await?;
    }

    Ok(())
}

/// Creates the data directories up front so every later write can assume
/// they exist.
pub(crate) fn setup_directories(config: &AppConfig) -> anyhow::Result<()> {
    for dir in [
        &config.data_dir,
        &config.pdf_dir,
        &config.parsed_dir,
        &config.exports_dir,
    ] {
        std::fs::create_dir_all(dir)
            .map_err(|e| anyhow::anyhow!("cannot create {}: {e}", dir.display()))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn setup_directories_creates_the_full_tree() {
        let root = tempfile::tempdir().unwrap();
        let base = root.path().join("data");
        let config = AppConfig {
            data_dir: base.clone(),
            pdf_dir: base.join("pdfs"),
            parsed_dir: base.join("parsed"),
            exports_dir: base.join("exports"),
            log_level: "info".to_owned(),
            brisa_url: String::new(),
            portugal_tolls_url: String::new(),
            request_timeout_secs: 15,
            user_agent: "test".to_owned(),
            max_retries: 0,
            retry_backoff_base_secs: 0,
            tariff_year: "2025".to_owned(),
            api_base_url: None,
            api_token: None,
        };

        setup_directories(&config).unwrap();
        assert!(base.join("pdfs").is_dir());
        assert!(base.join("parsed").is_dir());
        assert!(base.join("exports").is_dir());
    }
}
