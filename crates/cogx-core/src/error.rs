//! Error types for the cogx-core library.

use thiserror::Error;

/// Main error type for the cogx library.
#[derive(Error, Debug)]
pub enum CogxError {
    /// Configuration loading or validation error.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Test result extraction error.
    #[error("extraction error: {0}")]
    Extraction(#[from] ExtractionError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors raised while loading or compiling configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A config line has no `key: value` delimiter.
    #[error("line {line}: expected `key: value`, got {content:?}")]
    MissingDelimiter { line: usize, content: String },

    /// A numeric field could not be parsed.
    #[error("invalid number for {key}: {value:?}")]
    InvalidNumber { key: String, value: String },

    /// A boolean field could not be parsed.
    #[error("invalid flag for {key}: {value:?}")]
    InvalidFlag { key: String, value: String },

    /// A test was configured without any aliases.
    #[error("test {test} has no aliases")]
    EmptyAliases { test: String },

    /// The context window must hold at least one token.
    #[error("window size must be at least 1")]
    InvalidWindowSize,

    /// An alias set could not be compiled into a matcher.
    #[error("failed to compile alias pattern: {0}")]
    Pattern(#[from] regex::Error),
}

/// Errors related to test result extraction.
#[derive(Error, Debug)]
pub enum ExtractionError {
    /// The requested test has no configured alias set.
    #[error("test {0} is not configured for extraction")]
    UnknownTest(String),
}

/// Result type for the cogx library.
pub type Result<T> = std::result::Result<T, CogxError>;
