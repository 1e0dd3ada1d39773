//! Error types for loading, profiling and reporting.
//!
//! Profiling itself never fails: degenerate columns produce `None`
//! statistics instead of errors. Errors come from the edges of the crate:
//! reading the CSV file, validating configuration and writing reports.
//!
//! Errors serialize as `{code, message}` so they can be emitted as JSON by
//! the CLI.

use serde::Serialize;
use serde::ser::SerializeStruct;
use std::path::PathBuf;
use thiserror::Error;

/// The main error type for the profiler.
#[derive(Error, Debug)]
pub enum ProfilerError {
    /// Input file does not exist.
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// Input file has no data rows.
    #[error("CSV file has no data rows: {}", .0.display())]
    EmptyData(PathBuf),

    /// Input file could not be parsed as CSV.
    #[error("Error reading CSV file '{}': {reason}", .path.display())]
    CsvRead { path: PathBuf, reason: String },

    /// Invalid configuration provided.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Report could not be rendered or written.
    #[error("Failed to generate report: {0}")]
    ReportGenerationFailed(String),

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Polars error wrapper.
    #[error("Polars error: {0}")]
    Polars(#[from] polars::error::PolarsError),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error with context.
    #[error("{context}: {source}")]
    WithContext {
        context: String,
        #[source]
        source: Box<ProfilerError>,
    },
}

impl ProfilerError {
    /// Add context to an error.
    pub fn with_context(self, context: impl Into<String>) -> Self {
        ProfilerError::WithContext {
            context: context.into(),
            source: Box::new(self),
        }
    }

    /// Stable machine-readable code for this error.
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::FileNotFound(_) => "FILE_NOT_FOUND",
            Self::EmptyData(_) => "EMPTY_DATA",
            Self::CsvRead { .. } => "CSV_READ_FAILED",
            Self::InvalidConfig(_) => "INVALID_CONFIG",
            Self::ReportGenerationFailed(_) => "REPORT_GENERATION_FAILED",
            Self::Io(_) => "IO_ERROR",
            Self::Polars(_) => "POLARS_ERROR",
            Self::Json(_) => "JSON_ERROR",
            Self::WithContext { source, .. } => source.error_code(),
        }
    }

    /// Check if this error is caused by the input rather than the environment.
    pub fn is_input_error(&self) -> bool {
        match self {
            Self::FileNotFound(_) | Self::EmptyData(_) | Self::CsvRead { .. } => true,
            Self::WithContext { source, .. } => source.is_input_error(),
            _ => false,
        }
    }
}

impl From<crate::config::ConfigValidationError> for ProfilerError {
    fn from(err: crate::config::ConfigValidationError) -> Self {
        ProfilerError::InvalidConfig(err.to_string())
    }
}

/// Errors are serialized as a struct with `code` and `message` fields.
impl Serialize for ProfilerError {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut state = serializer.serialize_struct("ProfilerError", 2)?;
        state.serialize_field("code", &self.error_code())?;
        state.serialize_field("message", &self.to_string())?;
        state.end()
    }
}

/// Result type alias for profiler operations.
pub type Result<T> = std::result::Result<T, ProfilerError>;

/// Extension trait for adding context to Results.
pub trait ResultExt<T> {
    /// Add context to an error result.
    fn context(self, context: impl Into<String>) -> Result<T>;
}

impl<T> ResultExt<T> for Result<T> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.with_context(context))
    }
}

impl<T> ResultExt<T> for std::result::Result<T, std::io::Error> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| ProfilerError::Io(e).with_context(context))
    }
}
