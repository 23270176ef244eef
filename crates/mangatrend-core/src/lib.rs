//! Shared domain types, scoring rules, and configuration for mangatrend.

pub mod app_config;
pub mod config;
pub mod rank;
pub mod scoring;
pub mod types;

pub use app_config::{AppConfig, SheetsCredentials};
pub use config::{load_app_config, load_app_config_from_env};
pub use rank::rank_entries;
pub use scoring::{catalog_score, normalize_status, pick_title, round2};
pub use types::{
    PublicationStatus, RunConfig, ScoredEntry, SignalEntry, SignalSource, TitleRecord,
};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
