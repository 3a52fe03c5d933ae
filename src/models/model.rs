//! The predictive model seam and the on-disk linear model.
//!
//! Everything downstream of the encoder talks to a [`Predictor`]; what sits
//! behind it (a coefficient file, a scoring service) is not the pipeline's
//! business.

use std::fs::File;
use std::path::Path;

use nalgebra::{DMatrix, DVector};

use crate::domain::{FEATURE_COUNT, FeatureRow, ModelArtifact, ModelKind};
use crate::error::{AppError, EstimateError, InferenceError, SchemaError};

/// A loaded model with a single capability: one number per input row.
///
/// Implementations are immutable after construction so one instance can serve
/// every request.
pub trait Predictor: Send + Sync {
    fn predict(&self, rows: &[FeatureRow]) -> Result<Vec<f64>, InferenceError>;

    /// Short description for logs and the TUI header.
    fn describe(&self) -> String;
}

/// `salary = intercept + Σ coefficient_j · feature_j`.
#[derive(Debug, Clone)]
pub struct LinearModel {
    intercept: f64,
    coefficients: DVector<f64>,
}

impl LinearModel {
    /// Read and validate a model artifact from disk.
    pub fn load(path: &Path) -> Result<Self, AppError> {
        let file = File::open(path)
            .map_err(|e| AppError::new(2, format!("Failed to open model artifact '{}': {e}", path.display())))?;
        let artifact: ModelArtifact = serde_json::from_reader(file)
            .map_err(|e| AppError::new(2, format!("Invalid model artifact '{}': {e}", path.display())))?;

        if let Some(trained_at) = artifact.trained_at {
            log::info!("model artifact {} trained at {trained_at}", path.display());
        }

        Self::from_artifact(&artifact).map_err(|e| EstimateError::from(e).into())
    }

    /// Build a model from an artifact, checking its column layout against
    /// [`FeatureRow::COLUMNS`].
    pub fn from_artifact(artifact: &ModelArtifact) -> Result<Self, SchemaError> {
        match artifact.kind {
            ModelKind::Linear => {}
        }

        check_feature_names(&artifact.feature_names)?;

        if artifact.coefficients.len() != FEATURE_COUNT {
            return Err(SchemaError::other(
                "model artifact",
                format!(
                    "expected {FEATURE_COUNT} coefficients, found {}",
                    artifact.coefficients.len()
                ),
            ));
        }
        if !artifact.intercept.is_finite() || artifact.coefficients.iter().any(|c| !c.is_finite()) {
            return Err(SchemaError::other("model artifact", "non-finite parameter"));
        }

        Ok(Self {
            intercept: artifact.intercept,
            coefficients: DVector::from_column_slice(&artifact.coefficients),
        })
    }
}

impl Predictor for LinearModel {
    fn predict(&self, rows: &[FeatureRow]) -> Result<Vec<f64>, InferenceError> {
        let x = DMatrix::from_fn(rows.len(), FEATURE_COUNT, |i, j| rows[i].values()[j] as f64);
        let y = x * &self.coefficients;
        Ok(y.iter().map(|v| v + self.intercept).collect())
    }

    fn describe(&self) -> String {
        "linear".to_string()
    }
}

fn check_feature_names(names: &[String]) -> Result<(), SchemaError> {
    let missing: Vec<String> = FeatureRow::COLUMNS
        .iter()
        .filter(|col| !names.iter().any(|n| n == *col))
        .map(|col| col.to_string())
        .collect();
    let extra: Vec<String> = names
        .iter()
        .filter(|n| !FeatureRow::COLUMNS.contains(&n.as_str()))
        .cloned()
        .collect();

    if !missing.is_empty() || !extra.is_empty() {
        return Err(SchemaError::columns("model artifact", missing, extra));
    }

    // Same set, so any difference left is ordering (or duplicates).
    if names.iter().map(String::as_str).ne(FeatureRow::COLUMNS.iter().copied()) {
        return Err(SchemaError::other(
            "model artifact",
            format!("feature order must be {}", FeatureRow::COLUMNS.join(", ")),
        ));
    }

    Ok(())
}
