//! Error types for the Phonebook MCP Server.
//!
//! Validation failures live in [`crate::domain::ValidationError`] and
//! [`crate::validation::FieldErrors`]; this module covers startup concerns.

use crate::validation::FieldErrors;
use thiserror::Error;

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },

    /// Failed to load .env file
    #[error("Failed to load .env file: {0}")]
    DotenvError(String),
}

/// Errors that can occur while loading the startup seed file.
#[derive(Error, Debug)]
pub enum SeedError {
    /// The seed file could not be read
    #[error("Failed to read seed file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The seed file is not a JSON array of `{name, number}` objects
    #[error("Seed file is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A seed entry failed contact validation
    #[error("Seed entry {index} is invalid: {errors}")]
    InvalidEntry { index: usize, errors: FieldErrors },
}

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Convenience type alias for Results with SeedError
pub type SeedResult<T> = Result<T, SeedError>;
