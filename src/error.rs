//! Error handling for sounding download operations.
//!
//! Network failures, unavailable soundings and malformed tables are kept as
//! separate variants so callers can tell an empty archive slot from a broken
//! page.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by the sounding pipeline
#[derive(Error, Debug)]
pub enum Error {
    /// HTTP request failed or returned a non-success status
    #[error("HTTP request to {url} failed")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The service has no sounding for the requested station and period
    #[error("No sounding data available for {url}")]
    SoundingUnavailable { url: String },

    /// The response does not contain a recognisable sounding table
    #[error("Malformed sounding table: {reason}")]
    MalformedTable { reason: String },

    /// A row or frame does not match the fixed column schema
    #[error("Schema mismatch: expected {expected} columns, found {found}")]
    SchemaMismatch { expected: usize, found: usize },

    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Writing the delimited artifact failed
    #[error("Artifact error in '{path}'")]
    Artifact {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// Polars rejected a frame operation
    #[error("Polars error: {0}")]
    Polars(#[from] polars::error::PolarsError),

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

/// Result type alias for the sounding downloader
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create an HTTP error for the given URL
    pub fn http(url: impl Into<String>, source: reqwest::Error) -> Self {
        Self::Http {
            url: url.into(),
            source,
        }
    }

    /// Create an unavailable-sounding error
    pub fn sounding_unavailable(url: impl Into<String>) -> Self {
        Self::SoundingUnavailable { url: url.into() }
    }

    /// Create a malformed table error
    pub fn malformed_table(reason: impl Into<String>) -> Self {
        Self::MalformedTable {
            reason: reason.into(),
        }
    }

    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create an artifact error for the given path
    pub fn artifact(path: impl Into<PathBuf>, source: csv::Error) -> Self {
        Self::Artifact {
            path: path.into(),
            source,
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// True when the error signals an empty archive slot rather than a failure
    pub fn is_unavailable(&self) -> bool {
        matches!(self, Self::SoundingUnavailable { .. })
    }
}

impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}
