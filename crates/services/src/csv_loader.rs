//! Parse CSV text into a typed [`Dataset`].
//!
//! The first record is the header. Numeric-looking fields become numbers,
//! empty fields become [`CellValue::Empty`], everything else stays text.

use csv::{ReaderBuilder, Trim};
use regex::Regex;
use shared::{CellValue, Dataset, InspectError};
use std::collections::HashMap;
use std::path::Path;
use std::sync::OnceLock;

/// Integers beyond this magnitude lose precision as f64, so they stay text
const MAX_SAFE_FLOAT: f64 = 9_007_199_254_740_992.0;

const DELIMITER_CANDIDATES: &[u8] = &[b',', b'\t', b'|', b';', 0x1e, 0x1f];

/// Rows inspected per candidate when guessing the delimiter
const GUESS_PREVIEW_ROWS: usize = 10;

fn float_pattern() -> &'static Regex {
    static FLOAT: OnceLock<Regex> = OnceLock::new();
    FLOAT.get_or_init(|| {
        Regex::new(r"^\s*-?(\d+\.?|\.\d+|\d+\.\d+)([eE][-+]?\d+)?\s*$")
            .expect("float pattern is valid")
    })
}

/// CSV loader with delimiter detection
#[derive(Debug, Clone, Default)]
pub struct CsvLoader {
    /// Fixed delimiter; guessed per file when `None`
    delimiter: Option<u8>,

    /// Trim whitespace around fields
    trim: bool,
}

impl CsvLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = Some(delimiter);
        self
    }

    pub fn with_trim(mut self, trim: bool) -> Self {
        self.trim = trim;
        self
    }

    /// Read and parse a file. Invalid UTF-8 is replaced rather than rejected.
    pub fn load_file(&self, path: &Path) -> Result<Dataset, InspectError> {
        let bytes = std::fs::read(path).map_err(|e| InspectError::parse(e.to_string()))?;
        let content = String::from_utf8_lossy(&bytes);

        let is_tsv = path
            .extension()
            .map(|e| e.eq_ignore_ascii_case("tsv"))
            .unwrap_or(false);
        let delimiter = match self.delimiter {
            Some(d) => d,
            None if is_tsv => b'\t',
            None => guess_delimiter(&content),
        };

        self.parse(&content, delimiter)
    }

    /// Parse CSV content already in memory
    pub fn load_str(&self, content: &str) -> Result<Dataset, InspectError> {
        let delimiter = self.delimiter.unwrap_or_else(|| guess_delimiter(content));
        self.parse(content, delimiter)
    }

    fn parse(&self, content: &str, delimiter: u8) -> Result<Dataset, InspectError> {
        let mut reader = ReaderBuilder::new()
            .delimiter(delimiter)
            .trim(if self.trim { Trim::All } else { Trim::None })
            .flexible(true)
            .from_reader(content.as_bytes());

        let headers = reader
            .headers()
            .map_err(|e| InspectError::parse(format!("failed to read header row: {}", e)))?
            .iter()
            .map(|h| h.to_string())
            .collect();

        let mut dataset = Dataset::new(dedupe_headers(headers));

        for (index, result) in reader.records().enumerate() {
            let record = result
                .map_err(|e| InspectError::parse(format!("row {}: {}", index + 1, e)))?;
            dataset.push_row(record.iter().map(type_field).collect());
        }

        tracing::debug!(
            columns = dataset.columns().len(),
            rows = dataset.len(),
            delimiter = %(delimiter as char).escape_default(),
            "parsed csv"
        );
        Ok(dataset)
    }
}

/// Convert a raw field into a typed cell.
pub fn type_field(raw: &str) -> CellValue {
    if raw.is_empty() {
        return CellValue::Empty;
    }
    if float_pattern().is_match(raw) {
        if let Ok(n) = raw.trim().parse::<f64>() {
            if n.abs() < MAX_SAFE_FLOAT {
                return CellValue::Number(n);
            }
        }
    }
    CellValue::Text(raw.to_string())
}

/// Keep rows that have at least one non-empty value.
pub fn filter_empty_rows(dataset: Dataset) -> Dataset {
    dataset.without_blank_rows()
}

/// Suffix repeated header names (`a`, `a_1`, `a_2`) so every column is addressable.
fn dedupe_headers(headers: Vec<String>) -> Vec<String> {
    let mut seen: HashMap<String, usize> = HashMap::new();
    let mut out: Vec<String> = Vec::with_capacity(headers.len());

    for header in headers {
        let mut name = header.clone();
        while out.contains(&name) {
            let n = seen.entry(header.clone()).or_insert(0);
            *n += 1;
            name = format!("{}_{}", header, n);
        }
        out.push(name);
    }
    out
}

/// Pick the delimiter that yields the most consistent multi-field rows.
///
/// Falls back to a comma when no candidate averages at least two fields.
pub fn guess_delimiter(content: &str) -> u8 {
    let mut best: Option<(u8, usize, f64)> = None;

    for &candidate in DELIMITER_CANDIDATES {
        let mut reader = ReaderBuilder::new()
            .delimiter(candidate)
            .has_headers(false)
            .flexible(true)
            .from_reader(content.as_bytes());

        let counts: Vec<usize> = reader
            .records()
            .take(GUESS_PREVIEW_ROWS)
            .filter_map(|r| r.ok())
            .map(|r| r.len())
            .collect();
        if counts.is_empty() {
            continue;
        }

        let avg = counts.iter().sum::<usize>() as f64 / counts.len() as f64;
        let delta: usize = counts.windows(2).map(|w| w[0].abs_diff(w[1])).sum();

        let better = match best {
            None => true,
            Some((_, best_delta, best_avg)) => delta <= best_delta && avg > best_avg,
        };
        if better && avg > 1.99 {
            best = Some((candidate, delta, avg));
        }
    }

    best.map(|(d, _, _)| d).unwrap_or(b',')
}
