//! Application-wide error types.

use presale_quote::{AmountError, ConfigError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Presale configuration error: {0}")]
    Presale(#[from] ConfigError),

    #[error("Amount error: {0}")]
    Amount(#[from] AmountError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ApiError>;
