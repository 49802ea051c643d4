//! End-to-end conversion: CSV file → records → JSON file.
//!
//! # Example
//!
//! ```rust,ignore
//! use cinetune_data::{run, Movies, PipelineConfig};
//!
//! let result = run::<Movies>(&PipelineConfig::new("movies.csv", "movies_real.json"))?;
//! println!("{} movies, {} rows skipped", result.records.len(), result.skipped.len());
//! ```

use serde::Serialize;

use super::{transform_movie_row, transform_music_row, RowOutcome, SkippedRow};
use crate::config::PipelineConfig;
use crate::error::{PipelineError, RowError};
use crate::logs::{log_error, log_info, log_success, log_warning};
use crate::models::{MovieRecord, MusicRecord};
use crate::output::write_json;
use crate::parser::{CsvInfo, Row, RowReader};
use crate::report::{report_movies, report_music};

/// A CSV dataset with its own row conversion
pub trait Dataset {
    /// Output record type
    type Record: Serialize;

    /// Name used in logs
    const NAME: &'static str;

    /// Convert one row; `index` is 1-based
    fn transform_row(index: usize, row: &Row) -> RowOutcome<Self::Record>;

    /// Print statistics after a successful run
    fn report(records: &[Self::Record]);
}

/// `movies.csv` → `movies_real.json`
pub struct Movies;

/// `music_dataset.csv` → `music_real.json`
pub struct Music;

impl Dataset for Movies {
    type Record = MovieRecord;
    const NAME: &'static str = "movies";

    fn transform_row(index: usize, row: &Row) -> RowOutcome<MovieRecord> {
        transform_movie_row(index, row)
    }

    fn report(records: &[MovieRecord]) {
        report_movies(records);
    }
}

impl Dataset for Music {
    type Record = MusicRecord;
    const NAME: &'static str = "music";

    fn transform_row(index: usize, row: &Row) -> RowOutcome<MusicRecord> {
        transform_music_row(index, row)
    }

    fn report(records: &[MusicRecord]) {
        report_music(records);
    }
}

/// Records and skips of one pass over the rows
#[derive(Debug, Clone)]
pub struct TransformResult<T> {
    /// Converted records, in row order
    pub records: Vec<T>,
    /// Rows skipped because of an error
    pub skipped: Vec<SkippedRow>,
    /// Rows left out by a filter condition
    pub filtered: usize,
}

impl<T> TransformResult<T> {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            skipped: Vec::new(),
            filtered: 0,
        }
    }

    /// Get summary statistics
    pub fn summary(&self) -> String {
        format!(
            "Transformed: {} records, {} skipped, {} filtered",
            self.records.len(),
            self.skipped.len(),
            self.filtered
        )
    }
}

impl<T> Default for TransformResult<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of a complete run
#[derive(Debug, Clone)]
pub struct PipelineResult<T> {
    pub records: Vec<T>,
    pub skipped: Vec<SkippedRow>,
    pub filtered: usize,
    pub csv_info: CsvInfo,
}

/// Convert every row independently.
///
/// Error skips are logged as warnings; filtered rows are only counted.
pub fn transform_rows<D, I>(rows: I) -> TransformResult<D::Record>
where
    D: Dataset,
    I: IntoIterator<Item = Result<Row, RowError>>,
{
    let mut result = TransformResult::new();

    for (i, row) in rows.into_iter().enumerate() {
        let index = i + 1;
        let outcome = match row {
            Ok(row) => D::transform_row(index, &row),
            Err(err) => RowOutcome::invalid(index, err),
        };

        match outcome {
            RowOutcome::Record(record) => result.records.push(record),
            RowOutcome::Skipped(skip) if skip.is_error() => {
                log_warning(skip.to_string());
                result.skipped.push(skip);
            }
            RowOutcome::Skipped(_) => result.filtered += 1,
        }
    }

    result
}

/// Read `config.input`, convert it and overwrite `config.output`.
///
/// Only an unreadable input or an unwritable output fails the run; the error
/// is logged and returned, and nothing is written.
pub fn run<D: Dataset>(config: &PipelineConfig) -> Result<PipelineResult<D::Record>, PipelineError> {
    log_info(format!("📖 Reading {} from {}", D::NAME, config.input.display()));

    let reader = RowReader::open(&config.input, config.delimiter).map_err(fatal)?;
    let csv_info = reader.info().clone();
    log_success(format!("Detected encoding: {}", csv_info.encoding));
    log_success(format!("Separator: '{}'", format_delimiter(csv_info.delimiter)));
    log_success(format!("{} columns: {}", csv_info.headers.len(), csv_info.headers.join(", ")));

    log_info("⚙️  Transforming rows...");
    let result = transform_rows::<D, _>(reader);
    log_info(result.summary());

    write_json(&config.output, &result.records).map_err(fatal)?;
    log_success(format!(
        "💾 {} written with {} entries",
        config.output.display(),
        result.records.len()
    ));

    D::report(&result.records);

    Ok(PipelineResult {
        records: result.records,
        skipped: result.skipped,
        filtered: result.filtered,
        csv_info,
    })
}

fn fatal(err: impl Into<PipelineError>) -> PipelineError {
    let err = err.into();
    log_error(err.to_string());
    err
}

/// Format delimiter for display
fn format_delimiter(d: char) -> String {
    match d {
        '\t' => "TAB".to_string(),
        c => c.to_string(),
    }
}
