//! Command-line parsing for the salary estimator.
//!
//! The goal of this module is to keep **argument parsing** and **command dispatch**
//! separate from the encoding/model code.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::domain::{BatchPolicy, Category, RawRecord};

/// `-` as an output path means stdout.
pub const STDOUT_PATH: &str = "-";

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "salary", version, about = "Employee Salary Estimator")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Launch the interactive form (the default when no subcommand is given).
    Tui(ModelArgs),
    /// Estimate the salary of one employee.
    Predict(PredictArgs),
    /// Estimate salaries for every row of a CSV file.
    Batch(BatchArgs),
    /// Write a one-row CSV showing the expected batch columns.
    Template(TemplateArgs),
    /// List the accepted labels (and their codes) for the categorical inputs.
    Categories(CategoriesArgs),
    /// Write a synthetic batch file of random valid employees.
    Sample(SampleArgs),
}

/// Where the model comes from, and how salaries are shown.
///
/// Unset flags fall back to `SALARY_MODEL_PATH`, `SALARY_MODEL_URL` and
/// `SALARY_CURRENCY`, then to built-in defaults.
#[derive(Debug, Args, Clone, Default)]
pub struct ModelArgs {
    /// Model artifact (JSON).
    #[arg(long, value_name = "JSON")]
    pub model: Option<PathBuf>,

    /// Remote scoring endpoint; takes precedence over --model.
    #[arg(long, value_name = "URL")]
    pub model_url: Option<String>,

    /// Currency symbol for displayed salaries.
    #[arg(long)]
    pub currency: Option<String>,
}

#[derive(Debug, Args, Clone)]
pub struct PredictArgs {
    #[command(flatten)]
    pub model: ModelArgs,

    #[arg(long, default_value_t = 30, allow_negative_numbers = true)]
    pub age: i64,

    #[arg(long, default_value = "Private")]
    pub workclass: String,

    #[arg(long, default_value = "Some-college")]
    pub education: String,

    #[arg(long, default_value = "Never-married")]
    pub marital_status: String,

    #[arg(long, default_value = "Prof-specialty")]
    pub occupation: String,

    #[arg(long, default_value = "Male")]
    pub gender: String,

    #[arg(long, default_value_t = 40, allow_negative_numbers = true)]
    pub hours_per_week: i64,

    #[arg(long, visible_alias = "country", default_value = "United-States")]
    pub native_country: String,

    /// Print the estimate as JSON.
    #[arg(long)]
    pub json: bool,
}

impl PredictArgs {
    pub fn record(&self) -> RawRecord {
        RawRecord {
            age: self.age,
            workclass: self.workclass.clone(),
            education: self.education.clone(),
            marital_status: self.marital_status.clone(),
            occupation: self.occupation.clone(),
            gender: self.gender.clone(),
            hours_per_week: self.hours_per_week,
            native_country: self.native_country.clone(),
        }
    }
}

#[derive(Debug, Args, Clone)]
pub struct BatchArgs {
    #[command(flatten)]
    pub model: ModelArgs,

    /// Input CSV with the eight input columns.
    #[arg(short, long, value_name = "CSV")]
    pub input: PathBuf,

    /// Output CSV (`-` for stdout).
    #[arg(short, long, value_name = "CSV", default_value = "estimated_incomes.csv")]
    pub output: PathBuf,

    /// What to do with invalid rows.
    #[arg(long, value_enum, default_value_t = BatchPolicy::Strict)]
    pub policy: BatchPolicy,

    /// Shorthand for `--policy skip-invalid`.
    #[arg(long, conflicts_with = "policy")]
    pub skip_invalid: bool,

    /// Rows to show in the terminal summary.
    #[arg(long, default_value_t = 5)]
    pub preview: usize,
}

impl BatchArgs {
    pub fn effective_policy(&self) -> BatchPolicy {
        if self.skip_invalid {
            BatchPolicy::SkipInvalid
        } else {
            self.policy
        }
    }
}

#[derive(Debug, Args, Clone)]
pub struct TemplateArgs {
    /// Output CSV (`-` for stdout).
    #[arg(short, long, value_name = "CSV", default_value = crate::io::TEMPLATE_FILE_NAME)]
    pub output: PathBuf,
}

#[derive(Debug, Args, Clone)]
pub struct CategoriesArgs {
    /// Only list this feature.
    #[arg(long, value_enum)]
    pub feature: Option<Category>,
}

#[derive(Debug, Args, Clone)]
pub struct SampleArgs {
    /// Number of employees to generate.
    #[arg(short = 'n', long, default_value_t = 100)]
    pub count: usize,

    /// Random seed.
    #[arg(long, default_value_t = 42)]
    pub seed: u64,

    /// Output CSV (`-` for stdout).
    #[arg(short, long, value_name = "CSV", default_value = "sample_employees.csv")]
    pub output: PathBuf,
}
