//! Shared types, factor taxonomy, and configuration for pricecast.

pub mod app_config;
pub mod config;
pub mod taxonomy;
pub mod types;

use thiserror::Error;

pub use app_config::{AppConfig, Environment};
pub use config::{load_app_config, load_app_config_from_env};
pub use taxonomy::{Category, PRICE_FACTORS};
pub use types::{
    AggregateResult, CategoryFactors, Event, ExtractedEvent, FactorMap, FactorResult,
    SearchResult, TIMESTAMP_FORMAT,
};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required env var: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
