//! Shared estimate pipeline used by the CLI and the TUI front-ends.
//!
//! Keeping this in one place avoids duplicating the core workflow:
//! raw record(s) -> encode -> gateway -> prediction(s)
//!
//! The front-ends can then focus on presentation (printing vs widgets).

use std::io::Read;

use crate::domain::{BatchPolicy, Estimate, FORM_AGE_RANGE, FORM_HOURS_RANGE, RawRecord, RowError};
use crate::encode::{display_row, encode, encode_batch};
use crate::error::EstimateError;
use crate::gateway::InferenceGateway;
use crate::io::ingest::{BatchInput, BatchRow, read_batch};
use crate::models::Predictor;

/// All computed outputs of a batch run.
#[derive(Debug, Clone)]
pub struct BatchOutput {
    pub input: BatchInput,
    /// Rows that were predicted, in file order.
    pub rows: Vec<BatchRow>,
    /// `predictions[i]` belongs to `rows[i]`.
    pub predictions: Vec<f64>,
    /// Every skipped row (parse and encode failures), sorted by row.
    pub row_errors: Vec<RowError>,
}

/// Encode one record and predict its salary.
pub fn estimate_one(record: &RawRecord, model: &dyn Predictor) -> Result<Estimate, EstimateError> {
    warn_outside_form_ranges(std::slice::from_ref(record));

    let features = encode(record)?;
    let salary = InferenceGateway::new(model).predict_one(&features)?;

    Ok(Estimate {
        inputs: display_row(record),
        features,
        salary,
    })
}

/// Read, validate, encode and predict a batch file. Schema problems surface
/// before the model is called.
pub fn estimate_batch_from_reader<R: Read>(
    reader: R,
    policy: BatchPolicy,
    model: &dyn Predictor,
) -> Result<BatchOutput, EstimateError> {
    let input = read_batch(reader, policy)?;
    estimate_batch(input, policy, model)
}

/// Encode and predict an already-ingested batch.
pub fn estimate_batch(
    input: BatchInput,
    policy: BatchPolicy,
    model: &dyn Predictor,
) -> Result<BatchOutput, EstimateError> {
    let records: Vec<RawRecord> = input.rows.iter().map(|r| r.record.clone()).collect();
    warn_outside_form_ranges(&records);

    // Encoder rows are positions in `input.rows`; report file rows instead.
    let file_row = |pos: Option<usize>| pos.and_then(|p| input.rows.get(p - 1)).map(|r| r.row);

    let encoded = encode_batch(&records, policy).map_err(|err| {
        let row = file_row(err.row).unwrap_or_default();
        EstimateError::from(err.with_row(row))
    })?;

    let mut row_errors = input.row_errors.clone();
    for err in &encoded.rejected {
        if let Some(row) = file_row(err.row) {
            row_errors.push(RowError {
                row,
                message: err.detail(),
            });
        }
    }
    row_errors.sort_by_key(|e| e.row);

    if encoded.rows.is_empty() {
        return Err(EstimateError::NoValidRows);
    }

    let rows: Vec<BatchRow> = encoded.kept.iter().map(|&i| input.rows[i].clone()).collect();
    let predictions = InferenceGateway::new(model).predict_batch(&encoded.rows)?;

    log::info!(
        "batch: read={} predicted={} skipped={}",
        input.rows_read,
        predictions.len(),
        row_errors.len()
    );

    Ok(BatchOutput {
        input,
        rows,
        predictions,
        row_errors,
    })
}

fn warn_outside_form_ranges(records: &[RawRecord]) {
    let outside = records
        .iter()
        .filter(|r| !FORM_AGE_RANGE.contains(&r.age) || !FORM_HOURS_RANGE.contains(&r.hours_per_week))
        .count();
    if outside > 0 {
        log::warn!(
            "{outside} record(s) outside the form ranges (age {}..={}, hours {}..={}); passed to the model unchanged",
            FORM_AGE_RANGE.start(),
            FORM_AGE_RANGE.end(),
            FORM_HOURS_RANGE.start(),
            FORM_HOURS_RANGE.end(),
        );
    }
}
