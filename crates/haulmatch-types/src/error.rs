//! Error types for haulmatch

use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration directory not found")]
    NotFound,

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),
}

#[derive(Debug, Error)]
pub enum Error {
    /// Caller contract violation: zero, negative or non-finite input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// More than one reference row satisfied a lookup that must be unique
    #[error("Ambiguous match: {count} rows match {what}")]
    AmbiguousMatch { what: String, count: usize },

    #[error("Division by zero: {0}")]
    DivisionByZero(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Failed to load {path}: {message}")]
    DataLoad { path: String, message: String },

    #[error("Excel export error: {0}")]
    Excel(String),
}

impl Error {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Error::InvalidInput(message.into())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
