//! Custom error types for crm-audit-export
//!
//! This module defines the error hierarchy for the tool using thiserror
//! for ergonomic error definitions. The variants separate the three failure
//! classes a run can hit: bad configuration (caught before any network
//! contact), remote audit-service failures, and local output failures.

use thiserror::Error;

/// The main error type for export operations
#[derive(Error, Debug)]
pub enum AuditExportError {
    /// Configuration/validation errors, reported before contacting the service
    #[error("Configuration error: {0}")]
    Config(String),

    /// Transport or authentication failures from the audit service
    #[error("Remote service error: {0}")]
    Remote(String),

    /// Payloads the client could not decode
    #[error("Malformed response: {0}")]
    Response(String),

    /// Errors writing the CSV output
    #[error("Export error: {0}")]
    Export(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),
}

impl AuditExportError {
    /// Check if this is a configuration error
    pub fn is_config(&self) -> bool {
        matches!(self, Self::Config(_))
    }

    /// Check if this is a remote-service error
    pub fn is_remote(&self) -> bool {
        matches!(self, Self::Remote(_) | Self::Response(_))
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for AuditExportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<reqwest::Error> for AuditExportError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::Response(err.to_string())
        } else {
            Self::Remote(err.to_string())
        }
    }
}

impl From<serde_json::Error> for AuditExportError {
    fn from(err: serde_json::Error) -> Self {
        Self::Response(err.to_string())
    }
}

/// Result type alias for export operations
pub type ExportResult<T> = Result<T, AuditExportError>;
