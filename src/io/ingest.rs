//! Batch CSV ingest and validation.
//!
//! Batch files use the same human-readable contract as a single record: one
//! row per employee, labels for the categorical columns, integers for age and
//! hours. Numbers and labels are both checked here, row by row, so the first
//! bad row in the file is the one reported.
//!
//! Design goals:
//! - **Strict schema**: exactly the eight input columns, checked before any
//!   row is read, so a wrong file never reaches the model
//! - **Row-level validation**: under `skip-invalid`, bad rows are dropped and
//!   reported instead of failing the whole file
//! - **Verbatim echo**: the cells are kept as read so the export can repeat them

use std::collections::{HashMap, HashSet};
use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::StringRecord;

use crate::domain::{BatchPolicy, RawRecord, RowError};
use crate::encode::encode;
use crate::error::{AppError, EstimateError, SchemaError, ValidationError};

/// Columns a batch file must have (any order).
pub const INPUT_COLUMNS: [&str; 8] = [
    "age",
    "workclass",
    "education",
    "marital-status",
    "occupation",
    "gender",
    "hours-per-week",
    "native-country",
];

/// One accepted data row.
#[derive(Debug, Clone)]
pub struct BatchRow {
    /// 1-based data row (the header is not counted).
    pub row: usize,
    /// The cells as read, for echoing into the export.
    pub cells: StringRecord,
    pub record: RawRecord,
}

/// Ingest output: header + parsed rows + row errors.
#[derive(Debug, Clone)]
pub struct BatchInput {
    pub headers: StringRecord,
    pub rows: Vec<BatchRow>,
    pub row_errors: Vec<RowError>,
    pub rows_read: usize,
}

/// Open and read a batch CSV from disk.
pub fn load_batch(path: &Path, policy: BatchPolicy) -> Result<BatchInput, AppError> {
    let file = File::open(path)
        .map_err(|e| AppError::new(2, format!("Failed to open CSV '{}': {e}", path.display())))?;
    Ok(read_batch(file, policy)?)
}

/// Read a batch CSV from any reader.
pub fn read_batch<R: Read>(input: R, policy: BatchPolicy) -> Result<BatchInput, EstimateError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(input);

    let headers = reader
        .headers()
        .map_err(|e| SchemaError::other("batch file", format!("failed to read CSV headers: {e}")))?
        .clone();

    ensure_schema(&headers)?;
    let header_map = build_header_map(&headers);

    let mut rows = Vec::new();
    let mut row_errors = Vec::new();
    let mut rows_read = 0usize;

    for (idx, result) in reader.records().enumerate() {
        let row = idx + 1;
        rows_read += 1;

        let parsed = result
            .map_err(|e| ValidationError::malformed_row(e.to_string()))
            .and_then(|cells| parse_row(&cells, &header_map).map(|record| (cells, record)));

        match parsed {
            Ok((cells, record)) => rows.push(BatchRow { row, cells, record }),
            Err(err) => {
                let err = err.with_row(row);
                match policy {
                    BatchPolicy::Strict => return Err(err.into()),
                    BatchPolicy::SkipInvalid => row_errors.push(RowError {
                        row,
                        message: err.detail(),
                    }),
                }
            }
        }
    }

    Ok(BatchInput {
        headers,
        rows,
        row_errors,
        rows_read,
    })
}

fn normalize_header_name(name: &str) -> String {
    // Spreadsheet exports often prefix the first header with a UTF-8 BOM.
    let name = name.trim().trim_start_matches('\u{feff}');
    name.to_ascii_lowercase()
}

fn build_header_map(headers: &StringRecord) -> HashMap<String, usize> {
    headers
        .iter()
        .enumerate()
        .map(|(idx, name)| (normalize_header_name(name), idx))
        .collect()
}

fn ensure_schema(headers: &StringRecord) -> Result<(), SchemaError> {
    let mut seen = HashSet::new();
    let mut extra = Vec::new();
    for name in headers.iter() {
        let normalized = normalize_header_name(name);
        // Unknown names and repeats are both unexpected.
        if !INPUT_COLUMNS.contains(&normalized.as_str()) || !seen.insert(normalized) {
            extra.push(name.to_string());
        }
    }

    let missing: Vec<String> = INPUT_COLUMNS
        .iter()
        .filter(|col| !seen.contains(**col))
        .map(|col| col.to_string())
        .collect();

    if missing.is_empty() && extra.is_empty() {
        Ok(())
    } else {
        Err(SchemaError::columns("batch file", missing, extra))
    }
}

fn parse_row(record: &StringRecord, header_map: &HashMap<String, usize>) -> Result<RawRecord, ValidationError> {
    let parsed = RawRecord {
        age: parse_int(get(record, header_map, "age"), "age")?,
        workclass: get(record, header_map, "workclass").to_string(),
        education: get(record, header_map, "education").to_string(),
        marital_status: get(record, header_map, "marital-status").to_string(),
        occupation: get(record, header_map, "occupation").to_string(),
        gender: get(record, header_map, "gender").to_string(),
        hours_per_week: parse_int(get(record, header_map, "hours-per-week"), "hours-per-week")?,
        native_country: get(record, header_map, "native-country").to_string(),
    };
    encode(&parsed)?;
    Ok(parsed)
}

fn get<'a>(record: &'a StringRecord, header_map: &HashMap<String, usize>, name: &str) -> &'a str {
    header_map
        .get(name)
        .and_then(|idx| record.get(*idx))
        .unwrap_or("")
}

/// Integers, plus whole-valued decimals like `40.0` that spreadsheets emit.
fn parse_int(s: &str, field: &str) -> Result<i64, ValidationError> {
    if let Ok(v) = s.parse::<i64>() {
        return Ok(v);
    }
    match s.parse::<f64>() {
        Ok(v) if v.is_finite() && v.fract() == 0.0 && v.abs() < i64::MAX as f64 => Ok(v as i64),
        _ => Err(ValidationError::invalid_number(field, s)),
    }
}
