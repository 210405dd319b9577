//! Error types for the Spamprep library.
//!
//! All fallible operations return [`Result`], whose error type is the
//! [`SpamprepError`] enum. The variants follow the failure classes of the
//! pipeline: configuration, missing or empty sources, schema mismatches,
//! unmapped labels and analysis failures, plus wrapped collaborator errors.
//!
//! # Examples
//!
//! ```
//! use spamprep::error::{Result, SpamprepError};
//!
//! fn check_fraction(value: f64) -> Result<()> {
//!     if value <= 0.0 || value >= 1.0 {
//!         return Err(SpamprepError::config("test_size must be in (0, 1)"));
//!     }
//!     Ok(())
//! }
//!
//! assert!(check_fraction(0.2).is_ok());
//! assert!(check_fraction(1.5).is_err());
//! ```

use std::io;

use thiserror::Error;

/// The main error type for Spamprep operations.
#[derive(Error, Debug)]
pub enum SpamprepError {
    /// I/O errors (file operations)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A required parameter is missing or malformed
    #[error("Configuration error: {0}")]
    Config(String),

    /// The raw data source does not exist
    #[error("Source not found: {0}")]
    SourceNotFound(String),

    /// The raw data source contains zero records
    #[error("Empty source: {0}")]
    EmptySource(String),

    /// Expected columns are absent or shapes disagree
    #[error("Schema error: {0}")]
    Schema(String),

    /// A label value (or code) was not seen while fitting the encoder
    #[error("Unmapped label: {0}")]
    UnmappedLabel(String),

    /// Analysis-related errors (tokenization, vocabulary building)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// CSV reading or writing errors
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// YAML deserialization errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),
}

/// Result type alias for operations that may fail with SpamprepError.
pub type Result<T> = std::result::Result<T, SpamprepError>;

impl SpamprepError {
    /// Create a new configuration error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        SpamprepError::Config(msg.into())
    }

    /// Create a new source-not-found error.
    pub fn source_not_found<S: Into<String>>(msg: S) -> Self {
        SpamprepError::SourceNotFound(msg.into())
    }

    /// Create a new empty-source error.
    pub fn empty_source<S: Into<String>>(msg: S) -> Self {
        SpamprepError::EmptySource(msg.into())
    }

    /// Create a new schema error.
    pub fn schema<S: Into<String>>(msg: S) -> Self {
        SpamprepError::Schema(msg.into())
    }

    /// Create a new unmapped-label error.
    pub fn unmapped_label<S: Into<String>>(msg: S) -> Self {
        SpamprepError::UnmappedLabel(msg.into())
    }

    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        SpamprepError::Analysis(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        SpamprepError::Other(msg.into())
    }
}
