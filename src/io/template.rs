//! Writers for human-readable input files: the one-row template and
//! generated samples. Both use the batch header from `ingest::INPUT_COLUMNS`.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::domain::RawRecord;
use crate::encode::display_row;
use crate::error::AppError;
use crate::io::ingest::INPUT_COLUMNS;

pub const TEMPLATE_FILE_NAME: &str = "input_template.csv";

pub fn write_records<W: Write>(writer: W, records: &[RawRecord]) -> Result<(), csv::Error> {
    let mut out = csv::Writer::from_writer(writer);
    out.write_record(INPUT_COLUMNS)?;
    for record in records {
        // Display cells are already in input-column order.
        out.write_record(&display_row(record).cells)?;
    }
    out.flush()?;
    Ok(())
}

pub fn write_template<W: Write>(writer: W) -> Result<(), csv::Error> {
    write_records(writer, &[RawRecord::example()])
}

pub fn write_records_file(path: &Path, records: &[RawRecord]) -> Result<(), AppError> {
    let file = File::create(path)
        .map_err(|e| AppError::new(2, format!("Failed to create CSV '{}': {e}", path.display())))?;
    write_records(file, records).map_err(|e| AppError::new(2, format!("Failed to write CSV: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::BatchPolicy;
    use crate::io::ingest::read_batch;

    #[test]
    fn template_is_header_plus_example_row() {
        let mut buf = Vec::new();
        write_template(&mut buf).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "age,workclass,education,marital-status,occupation,gender,hours-per-week,native-country\n\
             30,Private,Some-college,Never-married,Prof-specialty,Male,40,United-States\n"
        );
    }

    #[test]
    fn template_is_a_valid_batch_file() {
        let mut buf = Vec::new();
        write_template(&mut buf).unwrap();
        let batch = read_batch(buf.as_slice(), BatchPolicy::Strict).unwrap();
        assert_eq!(batch.rows.len(), 1);
        assert_eq!(batch.rows[0].record, RawRecord::example());
    }
}
