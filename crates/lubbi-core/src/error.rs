//! Core error types.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, CoreError>;

#[derive(Debug, Error)]
pub enum CoreError {
    /// The sensor store lock was poisoned by a panicking writer.
    #[error("sensor store unavailable")]
    SensorsUnavailable,

    #[error("invalid chat pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),
}
