//! Domain error types
//!
//! This module defines the error hierarchy for the exporter.
//! All errors are domain-specific and don't expose third-party types.

use thiserror::Error;

/// Main exporter error type
///
/// This is the primary error type used throughout the application.
/// Recoverable API failures (a failed query page, a failed hydration batch)
/// are not errors at this level; they are reported through typed outcomes.
#[derive(Debug, Error)]
pub enum ExporterError {
    /// Configuration-related errors (missing credentials, bad base URL)
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Falcon API errors
    #[error("API error: {0}")]
    Api(#[from] ApiError),

    /// Authentication errors
    #[error("Authentication error: {0}")]
    Authentication(String),

    /// Export process errors
    #[error("Export error: {0}")]
    Export(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),
}

/// Falcon API errors
///
/// Errors that occur while talking to the Cloud Security Assets API.
/// These errors don't expose the HTTP client's types.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Failed to reach the API
    #[error("Failed to connect to API: {0}")]
    ConnectionFailed(String),

    /// Response body could not be decoded
    #[error("Invalid response from API: {0}")]
    InvalidResponse(String),

    /// Timeout
    #[error("Request timeout: {0}")]
    Timeout(String),

    /// Request could not be built or sent
    #[error("Request failed: {0}")]
    Request(String),
}

impl From<std::io::Error> for ExporterError {
    fn from(err: std::io::Error) -> Self {
        ExporterError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for ExporterError {
    fn from(err: serde_json::Error) -> Self {
        ExporterError::Serialization(err.to_string())
    }
}
