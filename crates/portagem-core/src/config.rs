use std::path::PathBuf;

use crate::app_config::AppConfig;
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a present value fails to parse. Every variable
/// has a default, so a bare environment always loads successfully.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the
/// process, without touching `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a present value fails to parse.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// This is the core parsing/validation logic, decoupled from the actual
/// environment so it can be tested with a pure `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u32>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let data_dir = PathBuf::from(or_default("PORTAGEM_DATA_DIR", "data"));
    let subdir = |var: &str, leaf: &str| -> PathBuf {
        lookup(var).map_or_else(|_| data_dir.join(leaf), PathBuf::from)
    };

    let pdf_dir = subdir("PORTAGEM_PDF_DIR", "pdfs");
    let parsed_dir = subdir("PORTAGEM_PARSED_DIR", "parsed");
    let exports_dir = subdir("PORTAGEM_EXPORTS_DIR", "exports");

    let log_level = or_default("PORTAGEM_LOG_LEVEL", "info");
    let brisa_url = or_default(
        "PORTAGEM_BRISA_URL",
        "https://www.brisaconcessao.pt/en/clients/tolls/toll-rates",
    );
    let portugal_tolls_url = or_default(
        "PORTAGEM_PORTUGAL_TOLLS_URL",
        "https://www.portugaltolls.com/en/web/portal-de-portagens/tarifarios",
    );

    let request_timeout_secs = parse_u64("PORTAGEM_REQUEST_TIMEOUT_SECS", "15")?;
    let user_agent = or_default("PORTAGEM_USER_AGENT", "portagem/0.1 (toll-tariffs)");
    let max_retries = parse_u32("PORTAGEM_MAX_RETRIES", "3")?;
    let retry_backoff_base_secs = parse_u64("PORTAGEM_RETRY_BACKOFF_BASE_SECS", "2")?;
    let tariff_year = or_default("PORTAGEM_TARIFF_YEAR", "2025");

    let api_base_url = lookup("PORTAGEM_API_URL").ok();
    let api_token = lookup("PORTAGEM_API_TOKEN").ok();

    Ok(AppConfig {
        data_dir,
        pdf_dir,
        parsed_dir,
        exports_dir,
        log_level,
        brisa_url,
        portugal_tolls_url,
        request_timeout_secs,
        user_agent,
        max_retries,
        retry_backoff_base_secs,
        tariff_year,
        api_base_url,
        api_token,
    })
}
