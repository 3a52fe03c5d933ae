//! Error types.
//!
//! Two layers:
//!
//! - [`EstimateError`] and its parts are what the encoder, the gateway and the
//!   batch reader return. They carry enough structure for tests and callers to
//!   tell an unknown label from a schema mismatch from a model fault.
//! - [`AppError`] is what the binary reports: a message plus a process exit code.
//!
//! Exit codes: 2 = bad input or schema, 3 = no usable rows, 4 = model/runtime failure.

use std::fmt;

#[derive(Clone)]
pub struct AppError {
    exit_code: u8,
    message: String,
}

impl AppError {
    pub fn new(exit_code: u8, message: impl Into<String>) -> Self {
        Self {
            exit_code,
            message: message.into(),
        }
    }

    pub fn exit_code(&self) -> u8 {
        self.exit_code
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl fmt::Debug for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppError")
            .field("exit_code", &self.exit_code)
            .field("message", &self.message)
            .finish()
    }
}

impl std::error::Error for AppError {}

/// Why a single input value was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationReason {
    /// The label is not in the feature's category table.
    UnknownCategory,
    /// A numeric cell did not parse as an integer.
    InvalidNumber,
    /// The CSV record itself could not be read (wrong field count, bad quoting).
    MalformedRow,
}

/// An input value that cannot be encoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// 1-based data row for batch input; `None` for single records.
    pub row: Option<usize>,
    pub field: String,
    pub value: String,
    pub reason: ValidationReason,
}

impl ValidationError {
    pub fn unknown_category(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            row: None,
            field: field.into(),
            value: value.into(),
            reason: ValidationReason::UnknownCategory,
        }
    }

    pub fn invalid_number(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            row: None,
            field: field.into(),
            value: value.into(),
            reason: ValidationReason::InvalidNumber,
        }
    }

    pub fn malformed_row(message: impl Into<String>) -> Self {
        Self {
            row: None,
            field: String::new(),
            value: message.into(),
            reason: ValidationReason::MalformedRow,
        }
    }

    pub fn with_row(mut self, row: usize) -> Self {
        self.row = Some(row);
        self
    }

    /// The message without the row prefix (used in per-row reports).
    pub fn detail(&self) -> String {
        match self.reason {
            ValidationReason::UnknownCategory => {
                format!("unknown {} '{}'", self.field, self.value)
            }
            ValidationReason::InvalidNumber => {
                format!("invalid {} '{}' (expected an integer)", self.field, self.value)
            }
            ValidationReason::MalformedRow => format!("malformed row: {}", self.value),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.row {
            Some(row) => write!(f, "row {row}: {}", self.detail()),
            None => write!(f, "{}", self.detail()),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Column layout mismatch between an input (batch file or model artifact) and
/// the expected schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaError {
    /// What was checked, e.g. "batch file" or "model artifact".
    pub context: String,
    pub missing: Vec<String>,
    pub extra: Vec<String>,
    pub note: Option<String>,
}

impl SchemaError {
    pub fn columns(context: impl Into<String>, missing: Vec<String>, extra: Vec<String>) -> Self {
        Self {
            context: context.into(),
            missing,
            extra,
            note: None,
        }
    }

    pub fn other(context: impl Into<String>, note: impl Into<String>) -> Self {
        Self {
            context: context.into(),
            missing: Vec::new(),
            extra: Vec::new(),
            note: Some(note.into()),
        }
    }
}

impl fmt::Display for SchemaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} schema mismatch", self.context)?;
        if !self.missing.is_empty() {
            write!(f, "; missing columns: {}", self.missing.join(", "))?;
        }
        if !self.extra.is_empty() {
            write!(f, "; unexpected columns: {}", self.extra.join(", "))?;
        }
        if let Some(note) = &self.note {
            write!(f, "; {note}")?;
        }
        Ok(())
    }
}

impl std::error::Error for SchemaError {}

/// A failure inside the predictive model. The model is opaque, so only its
/// message is kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InferenceError {
    pub message: String,
}

impl InferenceError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for InferenceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "model prediction failed: {}", self.message)
    }
}

impl std::error::Error for InferenceError {}

/// Everything that can go wrong between raw input and a predicted salary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EstimateError {
    Validation(ValidationError),
    Schema(SchemaError),
    Inference(InferenceError),
    /// A batch had no rows left to predict.
    NoValidRows,
}

impl EstimateError {
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Validation(_) | Self::Schema(_) => 2,
            Self::NoValidRows => 3,
            Self::Inference(_) => 4,
        }
    }
}

impl fmt::Display for EstimateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Validation(e) => write!(f, "validation error: {e}"),
            Self::Schema(e) => write!(f, "{e}"),
            Self::Inference(e) => write!(f, "{e}"),
            Self::NoValidRows => write!(f, "No valid rows remain after validation."),
        }
    }
}

impl std::error::Error for EstimateError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Validation(e) => Some(e),
            Self::Schema(e) => Some(e),
            Self::Inference(e) => Some(e),
            Self::NoValidRows => None,
        }
    }
}

impl From<ValidationError> for EstimateError {
    fn from(e: ValidationError) -> Self {
        Self::Validation(e)
    }
}

impl From<SchemaError> for EstimateError {
    fn from(e: SchemaError) -> Self {
        Self::Schema(e)
    }
}

impl From<InferenceError> for EstimateError {
    fn from(e: InferenceError) -> Self {
        Self::Inference(e)
    }
}

impl From<EstimateError> for AppError {
    fn from(e: EstimateError) -> Self {
        AppError::new(e.exit_code(), e.to_string())
    }
}
