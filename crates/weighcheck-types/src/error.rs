//! Error types for weighcheck

use thiserror::Error;

/// Errors reported by the compliance engine itself
///
/// An unrecognized jurisdiction is never one of these: it resolves to the
/// federal baseline.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ComplianceError {
    #[error("Invalid weight: {0} (expected a finite, non-negative number of pounds)")]
    InvalidWeight(String),

    #[error("Invalid axle count: {0} (an axle group needs at least one axle)")]
    InvalidAxleCount(u32),

    #[error("Invalid axle spacing: {0} ft (expected a finite, non-negative distance)")]
    InvalidSpacing(String),

    #[error("Invalid weight limit: {0} lbs (limits must be positive)")]
    InvalidLimit(u32),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration not found")]
    NotFound,

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Failed to save configuration: {0}")]
    SaveError(String),
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Compliance error: {0}")]
    Compliance(#[from] ComplianceError),

    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Invalid ticket file: {0}")]
    InvalidTicketFile(String),

    #[error("Excel export error: {0}")]
    Excel(String),
}

pub type Result<T> = std::result::Result<T, Error>;
