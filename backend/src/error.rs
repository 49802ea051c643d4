//! Error types for the dataset conversion pipelines.
//!
//! - [`CsvError`] - reading and decoding the source CSV (fatal)
//! - [`RowError`] - a single row could not be converted (recovered, row skipped)
//! - [`OutputError`] - serializing or writing the JSON array (fatal)
//! - [`PipelineError`] - top-level run errors
//!
//! Conversion into [`PipelineError`] is automatic via `From` implementations,
//! so `?` works across the reader, transformer and writer.

use std::path::PathBuf;

use thiserror::Error;

// =============================================================================
// CSV Reading Errors
// =============================================================================

/// Errors while opening or decoding the source CSV.
#[derive(Debug, Error)]
pub enum CsvError {
    /// Failed to read file.
    #[error("Failed to read '{}': {source}", .path.display())]
    IoError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// No headers found.
    #[error("No headers found in CSV")]
    NoHeaders,

    /// Invalid header line.
    #[error("Invalid CSV header: {0}")]
    InvalidHeader(String),

    /// Delimiter must be a single-byte character.
    #[error("Unsupported delimiter '{0}' (must be ASCII)")]
    InvalidDelimiter(char),
}

// =============================================================================
// Row Errors
// =============================================================================

/// Why a single row could not be turned into a record.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RowError {
    /// Value is not an integer.
    #[error("invalid integer in '{field}': '{value}'")]
    InvalidInteger { field: String, value: String },

    /// Value is not a finite float.
    #[error("invalid float in '{field}': '{value}'")]
    InvalidFloat { field: String, value: String },

    /// Release date starts with a digit but has no integer year prefix.
    #[error("invalid release year in '{field}': '{value}'")]
    InvalidYear { field: String, value: String },

    /// The CSV reader rejected the record itself.
    #[error("malformed CSV record: {0}")]
    Malformed(String),
}

impl RowError {
    pub fn invalid_integer(field: &str, value: &str) -> Self {
        Self::InvalidInteger { field: field.to_string(), value: value.to_string() }
    }

    pub fn invalid_float(field: &str, value: &str) -> Self {
        Self::InvalidFloat { field: field.to_string(), value: value.to_string() }
    }

    pub fn invalid_year(field: &str, value: &str) -> Self {
        Self::InvalidYear { field: field.to_string(), value: value.to_string() }
    }
}

// =============================================================================
// Output Errors
// =============================================================================

/// Errors while producing the JSON output file.
#[derive(Debug, Error)]
pub enum OutputError {
    /// JSON serialization failed.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Output file could not be written.
    #[error("Failed to write '{}': {source}", .path.display())]
    IoError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

// =============================================================================
// Pipeline Errors (top-level)
// =============================================================================

/// Top-level run errors.
///
/// Returned by [`crate::transform::pipeline::run`]. Row-level problems never
/// surface here; they end up in the run's skipped list instead.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// CSV reading error.
    #[error("CSV error: {0}")]
    Csv(#[from] CsvError),

    /// Output error.
    #[error("Output error: {0}")]
    Output(#[from] OutputError),
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for CSV reading.
pub type CsvResult<T> = Result<T, CsvError>;

/// Result type for a single row conversion.
pub type RowResult<T> = Result<T, RowError>;

/// Result type for output writing.
pub type OutputResult<T> = Result<T, OutputError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_conversion_chain() {
        // CsvError -> PipelineError
        let pipeline_err: PipelineError = CsvError::NoHeaders.into();
        assert!(pipeline_err.to_string().contains("No headers"));

        // OutputError -> PipelineError
        let output_err = OutputError::IoError {
            path: PathBuf::from("out/movies_real.json"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        let pipeline_err: PipelineError = output_err.into();
        assert!(pipeline_err.to_string().contains("movies_real.json"));
    }

    #[test]
    fn test_row_error_format() {
        let err = RowError::invalid_float("Vote_Average", "abc");
        let msg = err.to_string();
        assert!(msg.contains("Vote_Average"));
        assert!(msg.contains("'abc'"));
    }
}
