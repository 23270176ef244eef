use crate::app_config::{AppConfig, SheetsCredentials};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the real environment so it can be tested with a `HashMap`.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let require = |var: &str| -> Result<String, ConfigError> {
        lookup(var)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| ConfigError::MissingEnvVar(var.to_string()))
    };

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let sheet_id = require("SHEET_ID")?;

    // A pre-issued token wins over the service-account key.
    let sheets_credentials = match lookup("MANGATREND_SHEETS_ACCESS_TOKEN") {
        Ok(token) if !token.trim().is_empty() => SheetsCredentials::AccessToken(token),
        _ => SheetsCredentials::ServiceAccountJson(require("GOOGLE_SERVICE_ACCOUNT_JSON")?),
    };

    let log_level = or_default("MANGATREND_LOG_LEVEL", "info");
    let anilist_url = or_default("MANGATREND_ANILIST_URL", "https://graphql.anilist.co");
    let trends_url = or_default("MANGATREND_TRENDS_URL", "https://trends.google.com");
    let sheets_url = or_default("MANGATREND_SHEETS_URL", "https://sheets.googleapis.com");
    let request_timeout_secs = parse_u64("MANGATREND_REQUEST_TIMEOUT_SECS", "30")?;
    let trends_delay_ms = parse_u64("MANGATREND_TRENDS_DELAY_MS", "1000")?;
    let user_agent = or_default("MANGATREND_USER_AGENT", "mangatrend/0.1 (trend-report)");
    let config_sheet = or_default("MANGATREND_CONFIG_SHEET", "Config");
    let output_sheet = or_default("MANGATREND_OUTPUT_SHEET", "DailyTrends");

    Ok(AppConfig {
        sheet_id,
        sheets_credentials,
        log_level,
        anilist_url,
        trends_url,
        sheets_url,
        request_timeout_secs,
        trends_delay_ms,
        user_agent,
        config_sheet,
        output_sheet,
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
