//! Custom error types for the finance tracker
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions. The analytics layer never returns these;
//! they come from storage, configuration, export and CLI input validation.

use std::path::PathBuf;

use thiserror::Error;

/// The main error type for finance tracker operations
#[derive(Error, Debug)]
pub enum TrackerError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Delimited record reader/writer errors
    #[error("CSV error: {0}")]
    Csv(String),

    /// Validation errors for user input
    #[error("Validation error: {0}")]
    Validation(String),

    /// A stored record that cannot be parsed
    #[error("Invalid record in {} at line {line}: {reason}", file.display())]
    InvalidRecord {
        file: PathBuf,
        line: usize,
        reason: String,
    },

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),
}

impl TrackerError {
    /// Create an invalid record error
    pub fn invalid_record(file: impl Into<PathBuf>, line: usize, reason: impl Into<String>) -> Self {
        Self::InvalidRecord {
            file: file.into(),
            line,
            reason: reason.into(),
        }
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for TrackerError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for TrackerError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<csv::Error> for TrackerError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err.to_string())
    }
}

/// Result type alias for finance tracker operations
pub type TrackerResult<T> = Result<T, TrackerError>;
