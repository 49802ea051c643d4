//! # CineTune data - CSV datasets to front-end JSON
//!
//! Converts the movie and music CSV datasets into the JSON arrays the
//! front-end loads. Each run fully reprocesses one source file and
//! overwrites its output file.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │   CSV File  │────▶│  RowReader  │────▶│  Transform  │────▶│ JSON array  │
//! │  (ISO/UTF8) │     │  (auto-enc) │     │  (per row)  │     │  (pretty)   │
//! └─────────────┘     └─────────────┘     └─────────────┘     └─────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use cinetune_data::{run, Music, PipelineConfig};
//!
//! let result = run::<Music>(&PipelineConfig::music())?;
//! println!("Converted {} tracks", result.records.len());
//! ```
//!
//! ## Modules
//!
//! - [`error`] - Hierarchical error types
//! - [`config`] - Input/output locations
//! - [`logs`] - Log sink for progress and diagnostics
//! - [`parser`] - CSV row reader with auto-detection
//! - [`models`] - Output records
//! - [`transform`] - Row conversion and the pipeline
//! - [`output`] - JSON array writer
//! - [`report`] - End-of-run statistics

// Core modules
pub mod config;
pub mod error;
pub mod logs;
pub mod models;

// Reading
pub mod parser;

// Transformation
pub mod transform;

// Writing
pub mod output;
pub mod report;

// =============================================================================
// Re-exports
// =============================================================================

pub use config::PipelineConfig;

pub use error::{CsvError, OutputError, PipelineError, RowError};

pub use models::{MovieRecord, MusicRecord};

pub use parser::{detect_delimiter, detect_encoding, rows_to_json, CsvInfo, Row, RowReader};

pub use transform::{
    format_duration,
    resolve_moods,
    run,
    title_case,
    transform_movie_row,
    transform_music_row,
    transform_rows,
    Dataset,
    Movies,
    Music,
    PipelineResult,
    RowOutcome,
    SkipReason,
    SkippedRow,
    TransformResult,
};

pub use output::{to_json, write_json};
