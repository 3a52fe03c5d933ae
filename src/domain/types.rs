//! Shared domain types.
//!
//! These types are intentionally kept small and serializable so they can be:
//!
//! - built from the form, CLI flags, or CSV rows
//! - encoded and handed to the model
//! - printed or exported as JSON/CSV

use std::ops::RangeInclusive;

use chrono::{DateTime, Utc};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Number of columns the model was trained on.
pub const FEATURE_COUNT: usize = 8;

/// Age bounds offered by the interactive form. The encoder does not enforce them.
pub const FORM_AGE_RANGE: RangeInclusive<i64> = 18..=80;

/// Hours-per-week bounds offered by the interactive form.
pub const FORM_HOURS_RANGE: RangeInclusive<i64> = 1..=100;

/// A categorical input feature. Each one has its own fixed category table.
///
/// `ALL` lists them in the order they appear in a [`FeatureRow`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Workclass,
    Education,
    MaritalStatus,
    Occupation,
    Gender,
    NativeCountry,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Workclass,
        Category::Education,
        Category::MaritalStatus,
        Category::Occupation,
        Category::Gender,
        Category::NativeCountry,
    ];

    /// Column name in the model's training schema.
    pub fn feature_column(self) -> &'static str {
        match self {
            Category::Workclass => "workclass",
            Category::Education => "educational-num",
            Category::MaritalStatus => "marital-status",
            Category::Occupation => "occupation",
            Category::Gender => "gender",
            Category::NativeCountry => "native-country",
        }
    }

    /// Column name in human-readable batch files.
    ///
    /// Education is the only one that differs: batch files carry the label
    /// (`Bachelors`), the model column carries the number (`educational-num`).
    pub fn input_column(self) -> &'static str {
        match self {
            Category::Education => "education",
            other => other.feature_column(),
        }
    }

    /// Human-readable label for terminal output.
    pub fn display_name(self) -> &'static str {
        match self {
            Category::Workclass => "Workclass",
            Category::Education => "Education Level",
            Category::MaritalStatus => "Marital Status",
            Category::Occupation => "Occupation",
            Category::Gender => "Gender",
            Category::NativeCountry => "Country",
        }
    }
}

/// One employee in human-readable form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawRecord {
    pub age: i64,
    pub workclass: String,
    pub education: String,
    pub marital_status: String,
    pub occupation: String,
    pub gender: String,
    pub hours_per_week: i64,
    pub native_country: String,
}

impl RawRecord {
    /// The record used for the input template and as the form's starting point.
    pub fn example() -> Self {
        Self {
            age: 30,
            workclass: "Private".to_string(),
            education: "Some-college".to_string(),
            marital_status: "Never-married".to_string(),
            occupation: "Prof-specialty".to_string(),
            gender: "Male".to_string(),
            hours_per_week: 40,
            native_country: "United-States".to_string(),
        }
    }

    pub fn label(&self, category: Category) -> &str {
        match category {
            Category::Workclass => &self.workclass,
            Category::Education => &self.education,
            Category::MaritalStatus => &self.marital_status,
            Category::Occupation => &self.occupation,
            Category::Gender => &self.gender,
            Category::NativeCountry => &self.native_country,
        }
    }

    pub fn set_label(&mut self, category: Category, label: impl Into<String>) {
        let label = label.into();
        match category {
            Category::Workclass => self.workclass = label,
            Category::Education => self.education = label,
            Category::MaritalStatus => self.marital_status = label,
            Category::Occupation => self.occupation = label,
            Category::Gender => self.gender = label,
            Category::NativeCountry => self.native_country = label,
        }
    }
}

/// Encoded record in the exact column order of the model's training schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureRow([i64; FEATURE_COUNT]);

impl FeatureRow {
    pub const COLUMNS: [&'static str; FEATURE_COUNT] = [
        "age",
        "workclass",
        "educational-num",
        "marital-status",
        "occupation",
        "gender",
        "hours-per-week",
        "native-country",
    ];

    pub fn new(values: [i64; FEATURE_COUNT]) -> Self {
        Self(values)
    }

    pub fn values(&self) -> &[i64; FEATURE_COUNT] {
        &self.0
    }

    pub fn to_f64(&self) -> [f64; FEATURE_COUNT] {
        self.0.map(|v| v as f64)
    }
}

/// The human-readable twin of a [`FeatureRow`]: same columns, labels instead of codes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayRow {
    pub cells: [String; FEATURE_COUNT],
}

impl DisplayRow {
    pub const COLUMNS: [&'static str; FEATURE_COUNT] = FeatureRow::COLUMNS;
}

/// How a batch treats rows that fail validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum BatchPolicy {
    /// The first invalid row fails the whole batch.
    #[default]
    Strict,
    /// Invalid rows are dropped and reported; the rest are predicted.
    SkipInvalid,
}

/// A row-level problem encountered in a batch (only collected under
/// [`BatchPolicy::SkipInvalid`]).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowError {
    /// 1-based data row (the header is not counted).
    pub row: usize,
    pub message: String,
}

/// Which regression family an artifact describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelKind {
    Linear,
}

/// A saved model file (JSON).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelArtifact {
    pub tool: String,
    pub kind: ModelKind,
    /// Column order the model was trained on; must equal [`FeatureRow::COLUMNS`].
    pub feature_names: Vec<String>,
    pub intercept: f64,
    pub coefficients: Vec<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trained_at: Option<DateTime<Utc>>,
}

/// Result of a single-record estimate, kept together for display.
#[derive(Debug, Clone, Serialize)]
pub struct Estimate {
    pub inputs: DisplayRow,
    pub features: FeatureRow,
    pub salary: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn feature_columns_follow_category_order() {
        // Categorical columns sit at fixed positions around the two numeric ones.
        let positions = [1, 2, 3, 4, 5, 7];
        for (category, pos) in Category::ALL.iter().zip(positions) {
            assert_eq!(FeatureRow::COLUMNS[pos], category.feature_column());
        }
        assert_eq!(FeatureRow::COLUMNS[0], "age");
        assert_eq!(FeatureRow::COLUMNS[6], "hours-per-week");
    }

    #[test]
    fn set_label_round_trips_through_label() {
        let mut record = RawRecord::example();
        record.set_label(Category::NativeCountry, "Canada");
        assert_eq!(record.label(Category::NativeCountry), "Canada");
        assert_eq!(record.label(Category::Workclass), "Private");
    }
}
