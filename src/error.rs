//! Crate-wide error type.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum HistorianError {
    #[error("entry [{start_time}, {end_time}) has a negative duration")]
    NegativeDuration { start_time: i64, end_time: i64 },
    #[error("failed to parse entry JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("failed to (de)serialize config YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("an IO error occurred reading or writing the config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("HOME env var not set")]
    MissingHome,
}

pub type Result<T> = std::result::Result<T, HistorianError>;
