//! CSV row reader with encoding and delimiter auto-detection.
//!
//! Decodes the source once, then yields one [`Row`] (header → value) per data
//! line. Nothing dataset-specific lives here.

use serde_json::{Map, Value};
use std::borrow::Cow;
use std::collections::HashMap;
use std::io::Cursor;
use std::path::Path;

use crate::error::{CsvError, CsvResult, RowError};

/// One raw CSV row keyed by column header
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Row {
    values: HashMap<String, String>,
}

impl Row {
    pub fn new(values: HashMap<String, String>) -> Self {
        Self { values }
    }

    /// Raw value of a column, untouched
    pub fn get(&self, column: &str) -> Option<&str> {
        self.values.get(column).map(String::as_str)
    }

    /// Trimmed value of a column; `None` when the column is missing or blank
    pub fn field(&self, column: &str) -> Option<&str> {
        self.get(column).map(str::trim).filter(|v| !v.is_empty())
    }

    /// Trimmed value of a column, possibly blank; `None` only when the column is missing
    pub fn trimmed(&self, column: &str) -> Option<&str> {
        self.get(column).map(str::trim)
    }

    /// Trimmed value of a column, empty string when absent
    pub fn text(&self, column: &str) -> String {
        self.field(column).unwrap_or_default().to_string()
    }

    fn from_record(headers: &[String], record: &csv::StringRecord) -> Self {
        // Short records leave trailing columns absent, extra values are dropped
        let values = headers
            .iter()
            .zip(record.iter())
            .map(|(h, v)| (h.clone(), v.to_string()))
            .collect();
        Self { values }
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Row {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}

/// Source file metadata
#[derive(Debug, Clone, PartialEq)]
pub struct CsvInfo {
    /// Detected encoding
    pub encoding: String,
    /// Detected or configured delimiter
    pub delimiter: char,
    /// Column headers, in file order
    pub headers: Vec<String>,
}

/// Lazy sequence of rows from one CSV source.
///
/// Reading again means opening the file again.
pub struct RowReader {
    info: CsvInfo,
    records: csv::StringRecordsIntoIter<Cursor<String>>,
}

impl RowReader {
    /// Open a CSV file. `delimiter` overrides auto-detection.
    pub fn open<P: AsRef<Path>>(path: P, delimiter: Option<char>) -> CsvResult<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|source| CsvError::IoError {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_bytes(&bytes, delimiter)
    }

    /// Read CSV from raw bytes. `delimiter` overrides auto-detection.
    pub fn from_bytes(bytes: &[u8], delimiter: Option<char>) -> CsvResult<Self> {
        let encoding = detect_encoding(bytes);
        let content = decode_content(bytes, &encoding);
        let content = content.strip_prefix('\u{feff}').unwrap_or(&*content).to_string();

        // A blank source has no header line and yields no rows
        let blank = content.trim().is_empty();
        let content = if blank { String::new() } else { content };

        let delimiter = delimiter.unwrap_or_else(|| detect_delimiter(&content));
        if !delimiter.is_ascii() {
            return Err(CsvError::InvalidDelimiter(delimiter));
        }

        let mut reader = csv::ReaderBuilder::new()
            .delimiter(delimiter as u8)
            .has_headers(true)
            .flexible(true)
            .from_reader(Cursor::new(content));

        let headers: Vec<String> = reader
            .headers()
            .map_err(|e| CsvError::InvalidHeader(e.to_string()))?
            .iter()
            .map(|h| h.trim().to_string())
            .collect();

        if !blank && headers.iter().all(|h| h.is_empty()) {
            return Err(CsvError::NoHeaders);
        }

        Ok(Self {
            info: CsvInfo { encoding, delimiter, headers },
            records: reader.into_records(),
        })
    }

    pub fn info(&self) -> &CsvInfo {
        &self.info
    }
}

impl Iterator for RowReader {
    type Item = Result<Row, RowError>;

    fn next(&mut self) -> Option<Self::Item> {
        let record = self.records.next()?;
        Some(
            record
                .map(|r| Row::from_record(&self.info.headers, &r))
                .map_err(|e| RowError::Malformed(e.to_string())),
        )
    }
}

/// Detect the encoding of raw bytes.
///
/// Valid UTF-8 is taken as is; anything else goes through chardet.
pub fn detect_encoding(bytes: &[u8]) -> String {
    if std::str::from_utf8(bytes).is_ok() {
        return "utf-8".to_string();
    }

    let charset = chardet::detect(bytes).0;

    // Normalize charset names
    match charset.to_lowercase().as_str() {
        "ascii" | "utf-8" | "utf8" => "utf-8".to_string(),
        "iso-8859-1" | "iso-8859-15" | "latin-1" | "latin1" => "iso-8859-1".to_string(),
        "windows-1252" | "cp1252" => "windows-1252".to_string(),
        _ => charset,
    }
}

/// Decode bytes to text using the given encoding
pub fn decode_content<'a>(bytes: &'a [u8], encoding: &str) -> Cow<'a, str> {
    match encoding.to_lowercase().as_str() {
        "iso-8859-1" | "latin-1" | "latin1" => encoding_rs::ISO_8859_15.decode(bytes).0,
        "windows-1252" | "cp1252" => encoding_rs::WINDOWS_1252.decode(bytes).0,
        _ => String::from_utf8_lossy(bytes),
    }
}

/// Detect the delimiter by counting occurrences in the header line.
///
/// Falls back to `,` when no candidate appears.
pub fn detect_delimiter(content: &str) -> char {
    let first_line = content.lines().next().unwrap_or("");

    let separators = [',', ';', '\t', '|'];
    let mut best_sep = ',';
    let mut best_count = 0;

    for &sep in &separators {
        let count = first_line.matches(sep).count();
        if count > best_count {
            best_count = count;
            best_sep = sep;
        }
    }

    best_sep
}

/// Collect all rows as JSON objects, skipping records the reader rejects.
pub fn rows_to_json(reader: RowReader) -> Vec<Value> {
    let headers = reader.info().headers.clone();

    reader
        .filter_map(Result::ok)
        .map(|row| {
            let obj: Map<String, Value> = headers
                .iter()
                .map(|h| (h.clone(), Value::String(row.get(h).unwrap_or("").to_string())))
                .collect();
            Value::Object(obj)
        })
        .collect()
}
