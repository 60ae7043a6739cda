use thiserror::Error;

use crate::config::ConfigError;

/// Failures outside the simulation core: files, JSON, bad run settings.
#[derive(Debug, Error)]
pub enum LanderError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
}
