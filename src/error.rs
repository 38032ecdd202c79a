// error.rs
// Error types for configuration loading and state persistence.
//
// Per-tick range violations never reach these types: they are clamped where
// they happen. Science-data integrity failures are assertions, not errors.

use thiserror::Error;

/// Failure to load or validate a `ModelConfig` / `LabConfig`.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

impl ConfigError {
    pub fn invalid(message: impl Into<String>) -> Self {
        ConfigError::Invalid(message.into())
    }
}

/// Failure to save or restore a `ModelState`.
#[derive(Error, Debug)]
pub enum StateError {
    #[error("state I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON state error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("binary state error: {0}")]
    Bincode(#[from] bincode::Error),

    #[error("failed to parse saved state: not valid JSON or binary format")]
    UnknownFormat,

    #[error("saved state refers to solute #{index}, catalog has {available}")]
    UnknownSolute { index: usize, available: usize },
}
