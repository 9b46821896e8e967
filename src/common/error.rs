//! Error types for the bug lab
//!
//! Error messages are designed to be clear and actionable for learners,
//! naming the field path or file that caused the failure.

use std::io;
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the bug lab
#[derive(Error, Debug)]
pub enum Error {
    // === Filesystem/Serialization Errors ===
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Failed to write config to '{path}': {error}")]
    ConfigWrite { path: String, error: String },

    #[error("Failed to read config from '{path}': {error}")]
    ConfigRead { path: String, error: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // === Strict Extraction Errors ===
    #[error("Missing field '{path}'")]
    MissingField { path: String },

    #[error("Field '{path}' is null")]
    NullField { path: String },

    #[error("Field '{path}' has wrong type: expected {expected}, got {actual}")]
    WrongType {
        path: String,
        expected: String,
        actual: String,
    },

    #[error("Field '{path}' is present but empty")]
    EmptyField { path: String },
}

impl Error {
    /// Create a missing field error for a dotted path
    pub fn missing_field(path: &str) -> Self {
        Self::MissingField {
            path: path.to_string(),
        }
    }

    /// Create a null field error for a dotted path
    pub fn null_field(path: &str) -> Self {
        Self::NullField {
            path: path.to_string(),
        }
    }

    /// Create an empty field error for a dotted path
    pub fn empty_field(path: &str) -> Self {
        Self::EmptyField {
            path: path.to_string(),
        }
    }

    /// Create a wrong type error for a dotted path
    pub fn wrong_type(path: &str, expected: &str, actual: &str) -> Self {
        Self::WrongType {
            path: path.to_string(),
            expected: expected.to_string(),
            actual: actual.to_string(),
        }
    }
}
