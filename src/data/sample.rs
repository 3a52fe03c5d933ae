//! Synthetic employee sample generation.
//!
//! Produces human-readable records for demos and for exercising the batch
//! path. Every label is drawn from the category tables, so a generated file
//! always passes validation.

use rand::prelude::*;
use rand::rngs::StdRng;
use rand_distr::Normal;

use crate::domain::{Category, FORM_AGE_RANGE, FORM_HOURS_RANGE, RawRecord};
use crate::encode::table;
use crate::error::AppError;

/// Age distribution (years), roughly the shape of a census working population.
const AGE_MEAN: f64 = 38.6;
const AGE_SD: f64 = 13.6;

/// Weekly hours distribution.
const HOURS_MEAN: f64 = 40.4;
const HOURS_SD: f64 = 12.4;

/// Generate `count` records. The same `(count, seed)` always yields the same sample.
pub fn generate_sample(count: usize, seed: u64) -> Result<Vec<RawRecord>, AppError> {
    if count == 0 {
        return Err(AppError::new(2, "Sample count must be > 0."));
    }

    let mut rng = StdRng::seed_from_u64(seed);
    let age_dist = Normal::new(AGE_MEAN, AGE_SD)
        .map_err(|e| AppError::new(4, format!("Age distribution error: {e}")))?;
    let hours_dist = Normal::new(HOURS_MEAN, HOURS_SD)
        .map_err(|e| AppError::new(4, format!("Hours distribution error: {e}")))?;

    let mut records = Vec::with_capacity(count);
    for _ in 0..count {
        let age = clamp_round(age_dist.sample(&mut rng), *FORM_AGE_RANGE.start(), *FORM_AGE_RANGE.end());
        let hours = clamp_round(
            hours_dist.sample(&mut rng),
            *FORM_HOURS_RANGE.start(),
            *FORM_HOURS_RANGE.end(),
        );

        let mut record = RawRecord {
            age,
            hours_per_week: hours,
            ..RawRecord::example()
        };
        for category in Category::ALL {
            record.set_label(category, pick_label(&mut rng, category));
        }
        records.push(record);
    }

    Ok(records)
}

fn pick_label(rng: &mut StdRng, category: Category) -> &'static str {
    let entries = table(category).entries();
    entries[rng.gen_range(0..entries.len())].0
}

fn clamp_round(v: f64, lo: i64, hi: i64) -> i64 {
    (v.round() as i64).clamp(lo, hi)
}
