//! Formatted terminal output.
//!
//! We keep formatting code in one place so:
//! - the encoder and gateway stay free of presentation concerns
//! - output changes are localized (important for future snapshot tests)

use crate::domain::{Category, DisplayRow, Estimate, FEATURE_COUNT, FeatureRow, RowError};
use crate::encode::table;
use crate::io::ingest::{BatchInput, BatchRow};

/// `Estimated Salary: ₹859,500 per year`.
pub fn format_salary(salary: f64, currency: &str) -> String {
    // Whole currency units, truncated toward zero.
    format!("Estimated Salary: {currency}{} per year", group_thousands(salary.trunc() as i64))
}

/// Full single-record report: both views of the input, then the estimate.
pub fn format_estimate(estimate: &Estimate, currency: &str) -> String {
    let mut out = String::new();
    out.push_str("Your selected inputs:\n");
    out.push_str(&format_columns(&DisplayRow::COLUMNS, &estimate.inputs.cells));
    out.push('\n');
    out.push_str("Processed inputs for model:\n");
    out.push_str(&format_feature_row(&estimate.features));
    out.push('\n');
    out.push_str(&format_salary(estimate.salary, currency));
    out.push('\n');
    out
}

pub fn format_feature_row(row: &FeatureRow) -> String {
    let cells = row.values().map(|v| v.to_string());
    format_columns(&FeatureRow::COLUMNS, &cells)
}

/// Two-line table: headers over values, each column as wide as its widest cell.
fn format_columns(columns: &[&str; FEATURE_COUNT], cells: &[String; FEATURE_COUNT]) -> String {
    let widths: Vec<usize> = columns
        .iter()
        .zip(cells)
        .map(|(c, v)| c.chars().count().max(v.chars().count()))
        .collect();

    let header: Vec<String> = columns
        .iter()
        .zip(&widths)
        .map(|(c, &w)| format!("{c:<w$}"))
        .collect();
    let values: Vec<String> = cells
        .iter()
        .zip(&widths)
        .map(|(v, &w)| format!("{v:<w$}"))
        .collect();

    format!("{}\n{}\n", header.join("  ").trim_end(), values.join("  ").trim_end())
}

/// Batch summary: counts, row errors, and a preview of the first rows.
pub fn format_batch_summary(
    input: &BatchInput,
    rows: &[BatchRow],
    predictions: &[f64],
    row_errors: &[RowError],
    preview: usize,
    currency: &str,
) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "Rows: read={} | predicted={} | skipped={}\n",
        input.rows_read,
        predictions.len(),
        row_errors.len()
    ));

    for err in row_errors {
        out.push_str(&format!("  (skipped row {}) {}\n", err.row, err.message));
    }

    if preview > 0 && !rows.is_empty() {
        out.push_str("\nSalary predictions:\n");
        out.push_str(&format!(
            "{:>5} {:>4} {:<18} {:<14} {:<18} {:>6} {:>16}\n",
            "row", "age", "workclass", "education", "occupation", "hours", "estimate"
        ));
        out.push_str(&format!(
            "{:->5} {:->4} {:-<18} {:-<14} {:-<18} {:->6} {:->16}\n",
            "", "", "", "", "", "", ""
        ));
        for (row, prediction) in rows.iter().zip(predictions).take(preview) {
            let r = &row.record;
            out.push_str(&format!(
                "{:>5} {:>4} {:<18} {:<14} {:<18} {:>6} {:>16}\n",
                row.row,
                r.age,
                truncate(&r.workclass, 18),
                truncate(&r.education, 14),
                truncate(&r.occupation, 18),
                r.hours_per_week,
                format!("{currency}{}", group_thousands(prediction.trunc() as i64)),
            ));
        }
        if rows.len() > preview {
            out.push_str(&format!("  ... {} more\n", rows.len() - preview));
        }
    }

    out
}

/// Every label and code for the given categories.
pub fn format_categories(categories: &[Category]) -> String {
    let mut out = String::new();
    for (i, &category) in categories.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str(&format!(
            "{} ({}):\n",
            category.display_name(),
            category.input_column()
        ));
        for (label, code) in table(category).entries() {
            out.push_str(&format!("  {code:>3}  {label}\n"));
        }
    }
    out
}

fn group_thousands(v: i64) -> String {
    let digits = v.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if v < 0 {
        out.insert(0, '-');
    }
    out
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let mut out = String::new();
    for (i, ch) in s.chars().enumerate() {
        if i + 1 >= max {
            break;
        }
        out.push(ch);
    }
    out.push('.');
    out
}
