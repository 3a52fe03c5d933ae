//! Inference gateway: hand encoded rows to the model, return its numbers.
//!
//! One synchronous call per request. No retries, no caching. The gateway only
//! checks that the model kept its side of the contract (one finite value per
//! row); anything else is passed through unchanged.

use crate::domain::FeatureRow;
use crate::error::InferenceError;
use crate::models::Predictor;

#[derive(Clone, Copy)]
pub struct InferenceGateway<'a> {
    model: &'a dyn Predictor,
}

impl<'a> InferenceGateway<'a> {
    pub fn new(model: &'a dyn Predictor) -> Self {
        Self { model }
    }

    pub fn predict_one(&self, row: &FeatureRow) -> Result<f64, InferenceError> {
        let out = self.predict_batch(std::slice::from_ref(row))?;
        Ok(out[0])
    }

    /// Predict every row in one model call. Output `i` belongs to row `i`.
    pub fn predict_batch(&self, rows: &[FeatureRow]) -> Result<Vec<f64>, InferenceError> {
        log::debug!("predicting {} row(s) with {}", rows.len(), self.model.describe());
        let out = self.model.predict(rows)?;

        if out.len() != rows.len() {
            return Err(InferenceError::new(format!(
                "model returned {} prediction(s) for {} row(s)",
                out.len(),
                rows.len()
            )));
        }
        if let Some(idx) = out.iter().position(|v| !v.is_finite()) {
            return Err(InferenceError::new(format!(
                "non-finite prediction for row {}",
                idx + 1
            )));
        }

        Ok(out)
    }
}
