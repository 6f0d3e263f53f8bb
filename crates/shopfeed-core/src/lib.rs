pub mod app_config;
pub mod config;
pub mod items;
pub mod records;

pub use app_config::{AppConfig, DEFAULT_FEED_URL, DEFAULT_OUTPUT_PATH};
pub use config::{load_app_config, load_app_config_from_env, validate_app_config};
pub use items::{Field, GoogleField, SourceField, SourceItem, Vocabulary, GOOGLE_NAMESPACE};
pub use records::{OutputRecord, COLUMNS};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
