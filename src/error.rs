//! Error types for the lattice graph service.

use thiserror::Error;

/// Main error type for lattice operations.
#[derive(Error, Debug)]
pub enum LatticeError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("Source error: {0}")]
    Source(#[from] SourceError),

    #[error("Codec error: {0}")]
    Codec(#[from] CodecError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Configuration-related errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Missing required field: {0}")]
    MissingField(String),
}

/// Errors from the external language parser backend.
///
/// A parse failure is fatal for the text unit being ingested; retry policy
/// belongs to whoever feeds text units in, not here.
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Parser transport error: {0}")]
    Transport(String),

    #[error("Parser service error {status}: {message}")]
    Service { status: u16, message: String },

    #[error("Failed to decode parser response: {0}")]
    Decode(String),
}

/// Errors reading text-unit sources (CSV files).
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("Missing column '{0}' in source file")]
    MissingColumn(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Errors reading or writing the persisted graph document.
#[derive(Error, Debug)]
pub enum CodecError {
    #[error("Failed to read graph document: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("Failed to write graph document: {0}")]
    WriteFile(#[source] std::io::Error),

    #[error("Malformed graph document: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("Failed to encode graph document: {0}")]
    Encode(#[source] serde_json::Error),
}

/// Result type alias for lattice operations.
pub type Result<T> = std::result::Result<T, LatticeError>;
