use std::path::Path;

use crate::app_config::AppConfig;
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
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
/// Returns `ConfigError` if a value is present but invalid.
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
    use std::path::PathBuf;

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

    let openai_api_key = lookup("OPENAI_API_KEY").ok();
    let x_consumer_key = lookup("X_CONSUMER_KEY").ok();
    let x_consumer_secret = lookup("X_CONSUMER_SECRET").ok();
    let x_access_token = lookup("X_ACCESS_TOKEN").ok();
    let x_access_token_secret = lookup("X_ACCESS_TOKEN_SECRET").ok();
    let x_bearer_token = lookup("X_BEARER_TOKEN").ok();

    let log_level = or_default("LEADSCOUT_LOG_LEVEL", "info");
    let openai_model = or_default("LEADSCOUT_OPENAI_MODEL", "gpt-4o");
    let openai_base_url = or_default("LEADSCOUT_OPENAI_BASE_URL", "https://api.openai.com/v1");
    let x_base_url = or_default("LEADSCOUT_X_BASE_URL", "https://api.x.com/2");
    let request_timeout_secs = parse_u64("LEADSCOUT_REQUEST_TIMEOUT_SECS", "60")?;
    let rate_limit_max_waits = parse_u32("LEADSCOUT_RATE_LIMIT_MAX_WAITS", "3")?;
    let export_dir = PathBuf::from(or_default("LEADSCOUT_EXPORT_DIR", "."));

    Ok(AppConfig {
        openai_api_key,
        x_consumer_key,
        x_consumer_secret,
        x_access_token,
        x_access_token_secret,
        x_bearer_token,
        log_level,
        openai_model,
        openai_base_url,
        x_base_url,
        request_timeout_secs,
        rate_limit_max_waits,
        export_dir,
    })
}

/// Read a newline-separated queries file.
///
/// The raw text is returned untouched; blank-line handling belongs to
/// [`crate::resolve`].
///
/// # Errors
///
/// Returns [`ConfigError::QueriesFileIo`] if the file cannot be read.
pub fn load_queries_file(path: &Path) -> Result<String, ConfigError> {
    std::fs::read_to_string(path).map_err(|e| ConfigError::QueriesFileIo {
        path: path.display().to_string(),
        source: e,
    })
}
