use thiserror::Error;

use crate::types::Platform;

#[derive(Debug, Error)]
pub enum TrendError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{platform} API error: {message}")]
    Api { platform: Platform, message: String },

    /// A top-level key the platform's result depends on was absent.
    #[error("{platform} returned no data: {reason}")]
    MissingData { platform: Platform, reason: String },

    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("{0} is not configured")]
    NotConfigured(Platform),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
}
