//! Typed field extraction from raw rows.
//!
//! The `*_or` and `optional_*` helpers treat a missing column and a blank
//! value the same way. The `cell_*` helpers default only on a missing column
//! and reject a blank cell like any other unparseable value.

use crate::error::{RowError, RowResult};
use crate::parser::Row;

/// Parse a finite float, `None` when absent
pub fn optional_f64(row: &Row, column: &str) -> RowResult<Option<f64>> {
    row.field(column)
        .map(|raw| parse_finite(column, raw))
        .transpose()
}

/// Parse a finite float, `default` when absent
pub fn f64_or(row: &Row, column: &str, default: f64) -> RowResult<f64> {
    Ok(optional_f64(row, column)?.unwrap_or(default))
}

/// Parse an integer, `default` when absent
pub fn i64_or(row: &Row, column: &str, default: i64) -> RowResult<i64> {
    match row.field(column) {
        Some(raw) => raw
            .parse::<i64>()
            .map_err(|_| RowError::invalid_integer(column, raw)),
        None => Ok(default),
    }
}

fn parse_finite(column: &str, raw: &str) -> RowResult<f64> {
    raw.parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| RowError::invalid_float(column, raw))
}

/// Parse a finite float from a cell, `default` only when the column is missing
pub fn cell_f64_or(row: &Row, column: &str, default: f64) -> RowResult<f64> {
    row.trimmed(column)
        .map_or(Ok(default), |raw| parse_finite(column, raw))
}

/// Parse a float from a cell and truncate it toward zero, `default` only when
/// the column is missing
pub fn cell_truncated_i64_or(row: &Row, column: &str, default: i64) -> RowResult<i64> {
    row.trimmed(column)
        .map_or(Ok(default), |raw| parse_finite(column, raw).map(|v| v.trunc() as i64))
}

/// Year prefix of a `YYYY-MM-DD` style date.
///
/// Values not starting with a digit have no year; a digit-led value whose
/// prefix is not an integer is an error.
pub fn year_prefix(row: &Row, column: &str) -> RowResult<Option<i32>> {
    let Some(raw) = row.field(column) else {
        return Ok(None);
    };
    if !raw.starts_with(|c: char| c.is_ascii_digit()) {
        return Ok(None);
    }

    let year = raw.split('-').next().unwrap_or(raw);
    year.parse::<i32>()
        .map(Some)
        .map_err(|_| RowError::invalid_year(column, raw))
}
