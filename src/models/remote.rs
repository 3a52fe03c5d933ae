//! Remote scoring service client.
//!
//! Wire format (JSON over HTTP POST):
//!
//! ```text
//! request:  {"rows": [[30, 3, 10, 2, 8, 1, 40, 39], ...]}
//! response: {"predictions": [51234.5, ...]}
//! ```

use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};

use crate::domain::{FEATURE_COUNT, FeatureRow};
use crate::error::InferenceError;
use crate::models::model::Predictor;

pub struct RemoteModel {
    client: Client,
    url: String,
}

impl RemoteModel {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            url: url.into(),
        }
    }
}

#[derive(Debug, Serialize)]
struct ScoreRequest {
    rows: Vec<[f64; FEATURE_COUNT]>,
}

#[derive(Debug, Deserialize)]
struct ScoreResponse {
    predictions: Vec<f64>,
}

impl Predictor for RemoteModel {
    fn predict(&self, rows: &[FeatureRow]) -> Result<Vec<f64>, InferenceError> {
        let body = ScoreRequest {
            rows: rows.iter().map(FeatureRow::to_f64).collect(),
        };

        let resp = self
            .client
            .post(&self.url)
            .json(&body)
            .send()
            .map_err(|e| InferenceError::new(format!("scoring request failed: {e}")))?;

        if !resp.status().is_success() {
            return Err(InferenceError::new(format!(
                "scoring request failed with status {}",
                resp.status()
            )));
        }

        let body: ScoreResponse = resp
            .json()
            .map_err(|e| InferenceError::new(format!("failed to parse scoring response: {e}")))?;

        Ok(body.predictions)
    }

    fn describe(&self) -> String {
        format!("remote {}", self.url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_serializes_rows_as_number_arrays() {
        let body = ScoreRequest {
            rows: vec![FeatureRow::new([30, 3, 10, 2, 8, 1, 40, 39]).to_f64()],
        };
        let json = serde_json::to_string(&body).unwrap();
        assert_eq!(json, r#"{"rows":[[30.0,3.0,10.0,2.0,8.0,1.0,40.0,39.0]]}"#);
    }

    #[test]
    fn response_parses_predictions() {
        let resp: ScoreResponse = serde_json::from_str(r#"{"predictions": [1.5, 2]}"#).unwrap();
        assert_eq!(resp.predictions, vec![1.5, 2.0]);
    }

    #[test]
    fn unreachable_service_is_an_inference_error() {
        // Port 9 (discard) on localhost is not expected to run an HTTP server.
        let model = RemoteModel::new("http://127.0.0.1:9/score");
        let err = model.predict(&[FeatureRow::new([0; 8])]).unwrap_err();
        assert!(err.message.contains("scoring request failed"), "{err}");
    }
}
