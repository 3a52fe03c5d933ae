//! Export batch predictions to CSV.
//!
//! The export repeats the caller's columns as read and appends one more,
//! `Estimated_Income`, so the file drops straight back into a spreadsheet.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use csv::StringRecord;

use crate::error::AppError;
use crate::io::ingest::BatchRow;

pub const ESTIMATE_COLUMN: &str = "Estimated_Income";

/// Write `rows` with their predictions. `predictions[i]` belongs to `rows[i]`.
pub fn write_batch_csv<W: Write>(
    writer: W,
    headers: &StringRecord,
    rows: &[BatchRow],
    predictions: &[f64],
) -> Result<(), csv::Error> {
    let mut out = csv::Writer::from_writer(writer);

    let mut header = headers.clone();
    header.push_field(ESTIMATE_COLUMN);
    out.write_record(&header)?;

    for (row, prediction) in rows.iter().zip(predictions) {
        let mut record = row.cells.clone();
        record.push_field(&prediction.to_string());
        out.write_record(&record)?;
    }

    out.flush()?;
    Ok(())
}

/// Write batch predictions to a UTF-8 CSV file.
pub fn write_batch_file(
    path: &Path,
    headers: &StringRecord,
    rows: &[BatchRow],
    predictions: &[f64],
) -> Result<(), AppError> {
    let file = File::create(path)
        .map_err(|e| AppError::new(2, format!("Failed to create export CSV '{}': {e}", path.display())))?;
    write_batch_csv(file, headers, rows, predictions)
        .map_err(|e| AppError::new(2, format!("Failed to write export CSV: {e}")))
}
