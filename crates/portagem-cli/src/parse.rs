//! Parse an already-downloaded tariff PDF without touching the network.

use std::path::Path;

use portagem_core::AppConfig;

pub(crate) fn run_parse(config: &AppConfig, pdf_path: &Path) -> anyhow::Result<()> {
    let location_data = portagem_pdf::parse_tariff_pdf(pdf_path);

    let audit_path = portagem_pdf::audit::save_location_data(&location_data, &config.parsed_dir)?;
    let records = portagem_pdf::flatten(&location_data, &config.tariff_year, "Brisa PDF");

    let csv_path = portagem_export::export_to_csv(&records, &config.exports_dir, None)?;
    let json_path = portagem_export::export_to_json(&records, &config.exports_dir, None)?;

    println!(
        "parsed {} locations into {} records",
        location_data.len(),
        records.len()
    );
    println!("  audit: {}", audit_path.display());
    println!("  CSV:   {}", csv_path.display());
    println!("  JSON:  {}", json_path.display());

    Ok(())
}
