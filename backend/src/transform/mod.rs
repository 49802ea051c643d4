//! Row transformation.
//!
//! - `fields`: typed extraction with defaults
//! - `mood`: genre → mood table
//! - `movie` / `music`: one raw row → one record, or a skip
//! - `pipeline`: read → transform → write

pub mod fields;
pub mod mood;
pub mod movie;
pub mod music;
pub mod pipeline;

use std::fmt;

use crate::error::RowError;

pub use mood::{resolve_moods, GENRE_MOODS, NEUTRAL_MOOD};
pub use movie::transform_movie_row;
pub use music::{format_duration, title_case, transform_music_row, COVER_IMAGES};
pub use pipeline::*;

/// Result of transforming a single row
#[derive(Debug, Clone, PartialEq)]
pub enum RowOutcome<T> {
    /// Row converted to a record
    Record(T),
    /// Row left out of the output
    Skipped(SkippedRow),
}

impl<T> RowOutcome<T> {
    pub fn filtered(row: usize, reason: impl Into<String>) -> Self {
        Self::Skipped(SkippedRow { row, reason: SkipReason::Filtered(reason.into()) })
    }

    pub fn invalid(row: usize, error: RowError) -> Self {
        Self::Skipped(SkippedRow { row, reason: SkipReason::Invalid(error) })
    }

    pub fn record(self) -> Option<T> {
        match self {
            Self::Record(r) => Some(r),
            Self::Skipped(_) => None,
        }
    }

    pub fn skipped(&self) -> Option<&SkippedRow> {
        match self {
            Self::Record(_) => None,
            Self::Skipped(s) => Some(s),
        }
    }
}

/// A row that was left out
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedRow {
    /// 1-based row index
    pub row: usize,
    pub reason: SkipReason,
}

/// Why a row was left out
#[derive(Debug, Clone, PartialEq)]
pub enum SkipReason {
    /// Expected filter condition, not reported
    Filtered(String),
    /// Row could not be converted, reported as a diagnostic
    Invalid(RowError),
}

impl SkippedRow {
    pub fn is_error(&self) -> bool {
        matches!(self.reason, SkipReason::Invalid(_))
    }
}

impl fmt::Display for SkippedRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.reason {
            SkipReason::Filtered(reason) => write!(f, "Filtered row {}: {}", self.row, reason),
            SkipReason::Invalid(err) => write!(f, "Skipped row {} due to error: {}", self.row, err),
        }
    }
}

/// Convert a per-row result into an outcome
pub(crate) fn outcome<T>(row: usize, result: Result<T, RowError>) -> RowOutcome<T> {
    match result {
        Ok(record) => RowOutcome::Record(record),
        Err(err) => RowOutcome::invalid(row, err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skip_display_names_row_and_error() {
        let skip = SkippedRow {
            row: 4,
            reason: SkipReason::Invalid(RowError::invalid_float("Vote_Average", "n/a")),
        };
        let msg = skip.to_string();
        assert!(msg.contains("row 4"));
        assert!(msg.contains("Vote_Average"));
        assert!(skip.is_error());
    }

    #[test]
    fn test_outcome_accessors() {
        let ok: RowOutcome<u8> = outcome(1, Ok(7));
        assert_eq!(ok.clone().record(), Some(7));
        assert!(ok.skipped().is_none());

        let filtered: RowOutcome<u8> = RowOutcome::filtered(2, "empty artist");
        assert!(!filtered.skipped().unwrap().is_error());
        assert_eq!(filtered.record(), None);
    }
}
