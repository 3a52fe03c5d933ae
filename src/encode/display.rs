//! Human-readable view of a raw record, column-aligned with the feature row.

use crate::domain::{DisplayRow, RawRecord};

pub fn display_row(record: &RawRecord) -> DisplayRow {
    DisplayRow {
        cells: [
            record.age.to_string(),
            record.workclass.clone(),
            record.education.clone(),
            record.marital_status.clone(),
            record.occupation.clone(),
            record.gender.clone(),
            record.hours_per_week.to_string(),
            record.native_country.clone(),
        ],
    }
}
