//! JSON array writer.
//!
//! Output is pretty-printed with 2-space indentation and keeps non-ASCII
//! text as is. The target file is overwritten in place.

use serde::Serialize;
use std::path::Path;

use crate::error::{OutputError, OutputResult};

/// Serialize records as one JSON array
pub fn to_json<T: Serialize>(records: &[T]) -> OutputResult<String> {
    Ok(serde_json::to_string_pretty(records)?)
}

/// Write records as one JSON array, replacing any existing file
pub fn write_json<T: Serialize, P: AsRef<Path>>(path: P, records: &[T]) -> OutputResult<()> {
    let path = path.as_ref();
    let json = to_json(records)?;

    std::fs::write(path, json).map_err(|source| OutputError::IoError {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_array() {
        let records: Vec<serde_json::Value> = Vec::new();
        assert_eq!(to_json(&records).unwrap(), "[]");
    }

    #[test]
    fn test_two_space_indent() {
        let json = to_json(&[json!({"id": 1})]).unwrap();
        assert_eq!(json, "[\n  {\n    \"id\": 1\n  }\n]");
    }

    #[test]
    fn test_non_ascii_not_escaped() {
        let json = to_json(&[json!({"title": "Amélie – 千と千尋"})]).unwrap();
        assert!(json.contains("Amélie – 千と千尋"));
        assert!(!json.contains("\\u"));
    }

    #[test]
    fn test_overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.json");
        std::fs::write(&path, "stale content that is longer than the new one").unwrap();

        write_json(&path, &[json!(1)]).unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "[\n  1\n]");
    }

    #[test]
    fn test_unwritable_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("out.json");

        let err = write_json(&path, &[json!(1)]).unwrap_err();
        assert!(err.to_string().contains("out.json"));
    }
}
