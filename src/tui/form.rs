//! Form state for the interactive estimator.
//!
//! Numeric fields are bounded by the form ranges; categorical fields cycle
//! through their table's labels. Every value the form can produce encodes.

use crate::domain::{Category, FORM_AGE_RANGE, FORM_HOURS_RANGE, RawRecord};
use crate::encode::table;
use crate::error::ValidationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Age,
    Choice(Category),
    Hours,
}

impl Field {
    pub fn label(self) -> &'static str {
        match self {
            Field::Age => "Age",
            Field::Choice(category) => category.display_name(),
            Field::Hours => "Hours per Week",
        }
    }
}

/// Top-to-bottom order of the form.
pub const FIELDS: [Field; 8] = [
    Field::Age,
    Field::Choice(Category::Workclass),
    Field::Choice(Category::Education),
    Field::Choice(Category::MaritalStatus),
    Field::Choice(Category::Occupation),
    Field::Choice(Category::Gender),
    Field::Hours,
    Field::Choice(Category::NativeCountry),
];

#[derive(Debug, Clone)]
pub struct FormState {
    pub selected: usize,
    age: i64,
    hours: i64,
    /// Table position per category, indexed like `Category::ALL`.
    choices: [usize; 6],
}

impl FormState {
    /// Start from `record`. Numbers are clamped to the form ranges; every
    /// label must be in its table.
    pub fn from_record(record: &RawRecord) -> Result<Self, ValidationError> {
        let mut choices = [0; 6];
        for category in Category::ALL {
            let label = record.label(category);
            choices[slot(category)] = table(category)
                .position(label)
                .ok_or_else(|| ValidationError::unknown_category(category.input_column(), label))?;
        }
        Ok(Self {
            selected: 0,
            age: record.age.clamp(*FORM_AGE_RANGE.start(), *FORM_AGE_RANGE.end()),
            hours: record
                .hours_per_week
                .clamp(*FORM_HOURS_RANGE.start(), *FORM_HOURS_RANGE.end()),
            choices,
        })
    }

    pub fn field(&self) -> Field {
        FIELDS[self.selected]
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < FIELDS.len() {
            self.selected += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Move the selected field by `delta`: numbers clamp, choices wrap.
    pub fn adjust(&mut self, delta: i64) {
        match self.field() {
            Field::Age => {
                self.age = (self.age + delta).clamp(*FORM_AGE_RANGE.start(), *FORM_AGE_RANGE.end());
            }
            Field::Hours => {
                self.hours = (self.hours + delta).clamp(*FORM_HOURS_RANGE.start(), *FORM_HOURS_RANGE.end());
            }
            Field::Choice(category) => {
                let len = table(category).len() as i64;
                let slot = &mut self.choices[slot(category)];
                *slot = (*slot as i64 + delta).rem_euclid(len) as usize;
            }
        }
    }

    pub fn value(&self, field: Field) -> String {
        match field {
            Field::Age => self.age.to_string(),
            Field::Hours => self.hours.to_string(),
            Field::Choice(category) => self.choice_label(category).to_string(),
        }
    }

    pub fn record(&self) -> RawRecord {
        let mut record = RawRecord {
            age: self.age,
            hours_per_week: self.hours,
            ..RawRecord::example()
        };
        for category in Category::ALL {
            record.set_label(category, self.choice_label(category));
        }
        record
    }

    fn choice_label(&self, category: Category) -> &'static str {
        table(category)
            .label_at(self.choices[slot(category)])
            .unwrap_or_default()
    }
}

fn slot(category: Category) -> usize {
    match category {
        Category::Workclass => 0,
        Category::Education => 1,
        Category::MaritalStatus => 2,
        Category::Occupation => 3,
        Category::Gender => 4,
        Category::NativeCountry => 5,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encode::encode;
    use crate::error::ValidationReason;

    fn example_form() -> FormState {
        FormState::from_record(&RawRecord::example()).unwrap()
    }

    #[test]
    fn starts_from_example_record() {
        let form = example_form();
        assert_eq!(form.record(), RawRecord::example());
        assert_eq!(form.field(), Field::Age);
    }

    #[test]
    fn numbers_clamp_to_form_ranges() {
        let mut form = example_form();
        form.adjust(-100);
        assert_eq!(form.record().age, 18);
        form.adjust(1000);
        assert_eq!(form.record().age, 80);

        form.selected = 6;
        assert_eq!(form.field(), Field::Hours);
        form.adjust(-1000);
        assert_eq!(form.record().hours_per_week, 1);
    }

    #[test]
    fn choices_wrap_in_both_directions() {
        let mut form = example_form();
        form.selected = 5;
        assert_eq!(form.field(), Field::Choice(Category::Gender));
        let first = form.value(form.field());
        form.adjust(1);
        assert_ne!(form.value(form.field()), first);
        form.adjust(1);
        assert_eq!(form.value(form.field()), first);
        form.adjust(-1);
        form.adjust(-1);
        assert_eq!(form.value(form.field()), first);
    }

    #[test]
    fn selection_stays_in_bounds() {
        let mut form = example_form();
        form.select_prev();
        assert_eq!(form.selected, 0);
        for _ in 0..20 {
            form.select_next();
        }
        assert_eq!(form.selected, FIELDS.len() - 1);
        assert_eq!(form.field(), Field::Choice(Category::NativeCountry));
    }

    #[test]
    fn every_reachable_record_encodes() {
        let mut form = example_form();
        for (i, field) in FIELDS.iter().enumerate() {
            if let Field::Choice(category) = field {
                form.selected = i;
                for _ in 0..table(*category).len() {
                    assert!(encode(&form.record()).is_ok());
                    form.adjust(1);
                }
            }
        }
    }

    #[test]
    fn unknown_label_is_rejected() {
        let record = RawRecord {
            workclass: "Retired".to_string(),
            ..RawRecord::example()
        };
        let err = FormState::from_record(&record).unwrap_err();
        assert_eq!(err.reason, ValidationReason::UnknownCategory);
        assert_eq!(err.field, "workclass");
    }

    #[test]
    fn out_of_range_numbers_are_clamped() {
        let record = RawRecord {
            age: 5,
            hours_per_week: 200,
            ..RawRecord::example()
        };
        let rebuilt = FormState::from_record(&record).unwrap().record();
        assert_eq!(rebuilt.age, 18);
        assert_eq!(rebuilt.hours_per_week, 100);
    }
}
