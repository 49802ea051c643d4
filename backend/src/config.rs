//! Input/output locations for a pipeline run.
//!
//! Paths come from the built-in defaults, overridden by environment variables
//! (the binary loads a `.env` file first), overridden by CLI flags.

use std::path::PathBuf;

pub const DEFAULT_MOVIES_CSV: &str = "movies.csv";
pub const DEFAULT_MOVIES_JSON: &str = "movies_real.json";
pub const DEFAULT_MUSIC_CSV: &str = "music_dataset.csv";
pub const DEFAULT_MUSIC_JSON: &str = "music_real.json";

pub const ENV_MOVIES_CSV: &str = "CINETUNE_MOVIES_CSV";
pub const ENV_MOVIES_JSON: &str = "CINETUNE_MOVIES_JSON";
pub const ENV_MUSIC_CSV: &str = "CINETUNE_MUSIC_CSV";
pub const ENV_MUSIC_JSON: &str = "CINETUNE_MUSIC_JSON";

/// Options for a single pipeline run
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineConfig {
    /// Source CSV file
    pub input: PathBuf,

    /// JSON file to (over)write
    pub output: PathBuf,

    /// CSV delimiter (auto-detect if not set)
    pub delimiter: Option<char>,
}

impl PipelineConfig {
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
            delimiter: None,
        }
    }

    /// Movie pipeline paths from the environment, or the defaults
    pub fn movies() -> Self {
        Self::new(
            env_or(ENV_MOVIES_CSV, DEFAULT_MOVIES_CSV),
            env_or(ENV_MOVIES_JSON, DEFAULT_MOVIES_JSON),
        )
    }

    /// Music pipeline paths from the environment, or the defaults
    pub fn music() -> Self {
        Self::new(
            env_or(ENV_MUSIC_CSV, DEFAULT_MUSIC_CSV),
            env_or(ENV_MUSIC_JSON, DEFAULT_MUSIC_JSON),
        )
    }

    /// Apply CLI overrides on top of this config
    pub fn with_overrides(
        mut self,
        input: Option<PathBuf>,
        output: Option<PathBuf>,
        delimiter: Option<char>,
    ) -> Self {
        if let Some(input) = input {
            self.input = input;
        }
        if let Some(output) = output {
            self.output = output;
        }
        if delimiter.is_some() {
            self.delimiter = delimiter;
        }
        self
    }
}

fn env_or(key: &str, default: &str) -> PathBuf {
    std::env::var(key)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(default))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overrides_replace_only_given_values() {
        let config = PipelineConfig::new("a.csv", "a.json")
            .with_overrides(None, Some(PathBuf::from("b.json")), Some(';'));

        assert_eq!(config.input, PathBuf::from("a.csv"));
        assert_eq!(config.output, PathBuf::from("b.json"));
        assert_eq!(config.delimiter, Some(';'));
    }

    #[test]
    fn test_env_or_falls_back_on_unset_variable() {
        let path = env_or("CINETUNE_TEST_UNSET_VARIABLE", DEFAULT_MUSIC_CSV);
        assert_eq!(path, PathBuf::from("music_dataset.csv"));
    }
}
