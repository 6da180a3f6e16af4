//! Error types and exit codes for placemark
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args)
//! - 3: Data/store error (conflict, missing record, unusable database)

use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the placemark CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data/store error - conflict, missing record (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during placemark operations
#[derive(Error, Debug)]
pub enum PlacemarkError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human, json, or records)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    #[error("invalid {field}: {value} (must be a finite number)")]
    InvalidCoordinate { field: &'static str, value: f64 },

    // Data/store errors (exit code 3)
    #[error("location already exists: {name}")]
    LocationExists { name: String },

    #[error("location not found: {name}")]
    LocationNotFound { name: String },

    #[error("unusable database at {path:?}: {reason}")]
    InvalidDatabase { path: PathBuf, reason: String },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to {operation}: {reason}")]
    FailedOperation { operation: String, reason: String },

    #[error("{0}")]
    Other(String),
}

impl From<rusqlite::Error> for PlacemarkError {
    fn from(err: rusqlite::Error) -> Self {
        PlacemarkError::Other(err.to_string())
    }
}

impl PlacemarkError {
    /// Create an error for a failed database operation
    pub fn db_operation(operation: &str, error: impl std::fmt::Display) -> Self {
        PlacemarkError::FailedOperation {
            operation: operation.to_string(),
            reason: error.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            PlacemarkError::UnknownFormat(_)
            | PlacemarkError::UsageError(_)
            | PlacemarkError::InvalidCoordinate { .. } => ExitCode::Usage,

            PlacemarkError::LocationExists { .. }
            | PlacemarkError::LocationNotFound { .. }
            | PlacemarkError::InvalidDatabase { .. } => ExitCode::Data,

            PlacemarkError::Io(_)
            | PlacemarkError::Json(_)
            | PlacemarkError::FailedOperation { .. }
            | PlacemarkError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    fn error_type(&self) -> &'static str {
        match self {
            PlacemarkError::UnknownFormat(_) => "unknown_format",
            PlacemarkError::UsageError(_) => "usage_error",
            PlacemarkError::InvalidCoordinate { .. } => "invalid_coordinate",
            PlacemarkError::LocationExists { .. } => "location_exists",
            PlacemarkError::LocationNotFound { .. } => "location_not_found",
            PlacemarkError::InvalidDatabase { .. } => "invalid_database",
            PlacemarkError::Io(_) => "io_error",
            PlacemarkError::Json(_) => "json_error",
            PlacemarkError::FailedOperation { .. } => "failed_operation",
            PlacemarkError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for placemark operations
pub type Result<T> = std::result::Result<T, PlacemarkError>;
