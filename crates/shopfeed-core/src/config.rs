use std::path::PathBuf;

use crate::app_config::{AppConfig, DEFAULT_FEED_URL, DEFAULT_OUTPUT_PATH};
use crate::ConfigError;

pub const FEED_URL_VAR: &str = "CROPINK_FEED_URL";
pub const OUTPUT_PATH_VAR: &str = "OUTPUT_CSV_PATH";

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a variable is set to an unusable value.
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
/// Returns `ConfigError` if a variable is set to an unusable value.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the real environment so tests can drive it with a plain
/// `HashMap` instead of `set_var`/`remove_var`.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let config = AppConfig {
        feed_url: or_default(FEED_URL_VAR, DEFAULT_FEED_URL),
        output_path: PathBuf::from(or_default(OUTPUT_PATH_VAR, DEFAULT_OUTPUT_PATH)),
    };

    validate_app_config(&config)?;
    Ok(config)
}

/// Rejects configurations that cannot possibly produce a run.
///
/// Called for env-derived values and again after CLI overrides are applied.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidEnvVar`] naming the offending setting when the
/// feed locator or output path is blank.
pub fn validate_app_config(config: &AppConfig) -> Result<(), ConfigError> {
    if config.feed_url.trim().is_empty() {
        return Err(ConfigError::InvalidEnvVar {
            var: FEED_URL_VAR.to_string(),
            reason: "feed locator must not be empty".to_string(),
        });
    }

    if config.output_path.as_os_str().is_empty()
        || config.output_path.to_string_lossy().trim().is_empty()
    {
        return Err(ConfigError::InvalidEnvVar {
            var: OUTPUT_PATH_VAR.to_string(),
            reason: "output path must not be empty".to_string(),
        });
    }

    Ok(())
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
