//! Raw record → model feature row.
//!
//! Categorical labels go through their table; age and hours pass through
//! untouched. No range checks happen here: the model decides what an age of
//! 200 means.

use rayon::prelude::*;

use crate::domain::{BatchPolicy, Category, FeatureRow, RawRecord};
use crate::encode::tables::table;
use crate::error::ValidationError;

/// Encode one record.
pub fn encode(record: &RawRecord) -> Result<FeatureRow, ValidationError> {
    Ok(FeatureRow::new([
        record.age,
        lookup(record, Category::Workclass)?,
        lookup(record, Category::Education)?,
        lookup(record, Category::MaritalStatus)?,
        lookup(record, Category::Occupation)?,
        lookup(record, Category::Gender)?,
        record.hours_per_week,
        lookup(record, Category::NativeCountry)?,
    ]))
}

fn lookup(record: &RawRecord, category: Category) -> Result<i64, ValidationError> {
    let label = record.label(category);
    table(category)
        .code(label)
        .map(i64::from)
        .ok_or_else(|| ValidationError::unknown_category(category.input_column(), label))
}

/// Output of [`encode_batch`].
#[derive(Debug, Clone, Default)]
pub struct EncodedBatch {
    /// Encoded rows, in input order.
    pub rows: Vec<FeatureRow>,
    /// For each entry of `rows`, its 0-based index in the input slice.
    pub kept: Vec<usize>,
    /// Rejected inputs (only under `SkipInvalid`), with 1-based rows set.
    pub rejected: Vec<ValidationError>,
}

/// Encode a batch. Row `i` of the output always comes from an earlier input
/// than row `i + 1`.
///
/// Under `Strict`, the first invalid record (lowest index) fails the batch.
pub fn encode_batch(records: &[RawRecord], policy: BatchPolicy) -> Result<EncodedBatch, ValidationError> {
    let results: Vec<Result<FeatureRow, ValidationError>> = records.par_iter().map(encode).collect();

    let mut out = EncodedBatch {
        rows: Vec::with_capacity(records.len()),
        kept: Vec::with_capacity(records.len()),
        rejected: Vec::new(),
    };

    for (idx, result) in results.into_iter().enumerate() {
        match result {
            Ok(row) => {
                out.rows.push(row);
                out.kept.push(idx);
            }
            Err(err) => {
                let err = err.with_row(idx + 1);
                match policy {
                    BatchPolicy::Strict => return Err(err),
                    BatchPolicy::SkipInvalid => out.rejected.push(err),
                }
            }
        }
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationReason;

    fn record(workclass: &str, age: i64) -> RawRecord {
        RawRecord {
            age,
            workclass: workclass.to_string(),
            ..RawRecord::example()
        }
    }

    #[test]
    fn example_record_encodes_to_documented_row() {
        let row = encode(&RawRecord::example()).unwrap();
        assert_eq!(row.values(), &[30, 3, 10, 2, 8, 1, 40, 39]);
    }

    #[test]
    fn every_label_encodes_to_its_table_code() {
        let positions = [1, 2, 3, 4, 5, 7];
        for (category, pos) in Category::ALL.into_iter().zip(positions) {
            for &(label, code) in table(category).entries() {
                let mut rec = RawRecord::example();
                rec.set_label(category, label);
                let row = encode(&rec).unwrap();
                assert_eq!(row.values()[pos], i64::from(code), "{category:?} {label}");
            }
        }
    }

    #[test]
    fn encoding_is_deterministic() {
        let rec = RawRecord {
            education: "Doctorate".to_string(),
            gender: "Female".to_string(),
            ..RawRecord::example()
        };
        assert_eq!(encode(&rec).unwrap(), encode(&rec).unwrap());
    }

    #[test]
    fn numeric_fields_pass_through_unchecked() {
        let rec = RawRecord {
            age: 200,
            hours_per_week: -5,
            ..RawRecord::example()
        };
        let row = encode(&rec).unwrap();
        assert_eq!(row.values()[0], 200);
        assert_eq!(row.values()[6], -5);
    }

    #[test]
    fn unknown_label_is_a_validation_error() {
        let err = encode(&record("Retired", 30)).unwrap_err();
        assert_eq!(err.reason, ValidationReason::UnknownCategory);
        assert_eq!(err.field, "workclass");
        assert_eq!(err.value, "Retired");
        assert_eq!(err.row, None);
    }

    #[test]
    fn batch_preserves_order() {
        let records: Vec<RawRecord> = (20..60).map(|age| record("Private", age)).collect();
        let batch = encode_batch(&records, BatchPolicy::Strict).unwrap();
        let ages: Vec<i64> = batch.rows.iter().map(|r| r.values()[0]).collect();
        assert_eq!(ages, (20..60).collect::<Vec<_>>());
        assert_eq!(batch.kept, (0..40).collect::<Vec<_>>());
    }

    #[test]
    fn strict_batch_fails_on_first_bad_row() {
        let records = vec![
            record("Private", 30),
            record("Retired", 31),
            record("Unemployed", 32),
        ];
        let err = encode_batch(&records, BatchPolicy::Strict).unwrap_err();
        assert_eq!(err.row, Some(2));
        assert_eq!(err.value, "Retired");
    }

    #[test]
    fn skip_invalid_reports_and_keeps_the_rest() {
        let records = vec![
            record("Private", 30),
            record("Retired", 31),
            record("State-gov", 32),
        ];
        let batch = encode_batch(&records, BatchPolicy::SkipInvalid).unwrap();
        assert_eq!(batch.kept, vec![0, 2]);
        assert_eq!(batch.rows[1].values()[1], 2);
        assert_eq!(batch.rejected.len(), 1);
        assert_eq!(batch.rejected[0].row, Some(2));
    }
}
