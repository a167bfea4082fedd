//! Shared configuration for the trendboard workspace.

mod app_config;
mod config;

pub use app_config::{AppConfig, PlatformQueries};
pub use config::{load_app_config, load_app_config_from_env};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
