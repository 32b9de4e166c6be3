//! Domain error types
//!
//! This module defines the error hierarchy for catalog-sync.
//! All errors are domain-specific and don't expose third-party types.

use thiserror::Error;

/// Main catalog-sync error type
///
/// This is the primary error type used throughout the application.
/// Every failure aborts the remaining pipeline steps.
#[derive(Debug, Error)]
pub enum SyncError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Vendor API errors
    #[error("Vendor API error: {0}")]
    Vendor(#[from] VendorError),

    /// Cloud storage upload errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Database errors
    #[error("Database error: {0}")]
    Database(String),

    /// CSV export errors
    #[error("Export error: {0}")]
    Export(String),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),
}

impl SyncError {
    /// Returns true when the error came from a rejected vendor login
    pub fn is_authentication(&self) -> bool {
        matches!(
            self,
            SyncError::Vendor(VendorError::AuthenticationFailed { .. })
        )
    }
}

/// Vendor API errors
///
/// Errors that occur when talking to the supplier's shop API.
/// These errors don't expose the HTTP client's types.
#[derive(Debug, Error)]
pub enum VendorError {
    /// Failed to reach the vendor API
    #[error("Failed to connect to vendor API: {0}")]
    ConnectionFailed(String),

    /// Login returned a non-200 status
    #[error("Login failed with status {status}: {message}")]
    AuthenticationFailed { status: u16, message: String },

    /// A catalog page request returned a non-success status
    #[error("Catalog page {page} failed with status {status}: {message}")]
    PageFailed {
        page: u32,
        status: u16,
        message: String,
    },

    /// The response body could not be decoded
    #[error("Invalid response from vendor API: {0}")]
    InvalidResponse(String),

    /// A catalog request was made before a successful login
    #[error("Not authenticated with vendor API")]
    NotAuthenticated,
}

// Conversion from std::io::Error
impl From<std::io::Error> for SyncError {
    fn from(err: std::io::Error) -> Self {
        SyncError::Io(err.to_string())
    }
}

// Conversion from serde_json::Error
impl From<serde_json::Error> for SyncError {
    fn from(err: serde_json::Error) -> Self {
        SyncError::Serialization(err.to_string())
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for SyncError {
    fn from(err: toml::de::Error) -> Self {
        SyncError::Configuration(format!("TOML parse error: {err}"))
    }
}

// Conversion from csv errors
impl From<csv::Error> for SyncError {
    fn from(err: csv::Error) -> Self {
        SyncError::Export(err.to_string())
    }
}
