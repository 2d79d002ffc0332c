//! Error types and exit codes for cinematch
//!
//! Exit codes:
//! - 0: Success (an unmatched query is still a success)
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args, invalid config values)
//! - 3: Data error (missing data file, missing CSV column)

mod macros;

use std::path::PathBuf;
use thiserror::Error;

/// Process exit codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - missing file or column (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during cinematch operations
#[derive(Error, Debug)]
pub enum CinematchError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human, json, or records)")]
    UnknownFormat(String),

    #[error("--format may only be specified once")]
    DuplicateFormat,

    #[error("{0}")]
    UsageError(String),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    #[error("unsupported {context}: {value} (supported: {supported})")]
    Unsupported {
        context: String,
        value: String,
        supported: String,
    },

    // Data errors (exit code 3)
    #[error("data file not found: {path:?}")]
    DataFileNotFound { path: PathBuf },

    #[error("missing column '{column}' in {table} table")]
    MissingColumn { table: String, column: String },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("failed to {operation} {target}: {reason}")]
    FailedOperationWithTarget {
        operation: String,
        target: String,
        reason: String,
    },

    #[error("{0}")]
    Other(String),
}

impl CinematchError {
    /// Create an error for a failed IO operation with context
    pub fn io_operation(
        operation: &str,
        path: impl std::fmt::Display,
        error: impl std::fmt::Display,
    ) -> Self {
        CinematchError::FailedOperationWithTarget {
            operation: operation.to_string(),
            target: path.to_string(),
            reason: error.to_string(),
        }
    }

    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        CinematchError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for an unsupported value
    pub fn unsupported(
        context: &str,
        value: impl std::fmt::Display,
        supported: impl std::fmt::Display,
    ) -> Self {
        CinematchError::Unsupported {
            context: context.to_string(),
            value: value.to_string(),
            supported: supported.to_string(),
        }
    }

    /// Create an error for a required column absent from a CSV header
    pub fn missing_column(table: &str, column: &str) -> Self {
        CinematchError::MissingColumn {
            table: table.to_string(),
            column: column.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            CinematchError::UnknownFormat(_)
            | CinematchError::DuplicateFormat
            | CinematchError::UsageError(_)
            | CinematchError::InvalidValue { .. }
            | CinematchError::Unsupported { .. } => ExitCode::Usage,

            CinematchError::DataFileNotFound { .. } | CinematchError::MissingColumn { .. } => {
                ExitCode::Data
            }

            CinematchError::Io(_)
            | CinematchError::Csv(_)
            | CinematchError::Json(_)
            | CinematchError::Toml(_)
            | CinematchError::FailedOperationWithTarget { .. }
            | CinematchError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    fn error_type(&self) -> &'static str {
        match self {
            CinematchError::UnknownFormat(_) => "unknown_format",
            CinematchError::DuplicateFormat => "duplicate_format",
            CinematchError::UsageError(_) => "usage_error",
            CinematchError::InvalidValue { .. } => "invalid_value",
            CinematchError::Unsupported { .. } => "unsupported",
            CinematchError::DataFileNotFound { .. } => "data_file_not_found",
            CinematchError::MissingColumn { .. } => "missing_column",
            CinematchError::Io(_) => "io_error",
            CinematchError::Csv(_) => "csv_error",
            CinematchError::Json(_) => "json_error",
            CinematchError::Toml(_) => "toml_error",
            CinematchError::FailedOperationWithTarget { .. } => "failed_operation_with_target",
            CinematchError::Other(_) => "other",
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

/// Result type alias for cinematch operations
pub type Result<T> = std::result::Result<T, CinematchError>;
