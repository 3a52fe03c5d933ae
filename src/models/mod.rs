//! Predictive model backends.
//!
//! The pipeline only sees the [`Predictor`] trait. Two backends ship:
//! a linear model read from a JSON artifact, and a client for a remote scoring
//! service.

pub mod model;
pub mod remote;

pub use model::*;
pub use remote::*;

use crate::config::{AppConfig, ModelSource};
use crate::error::AppError;

/// Load the configured model once, at startup.
pub fn load_predictor(config: &AppConfig) -> Result<Box<dyn Predictor>, AppError> {
    let predictor: Box<dyn Predictor> = match &config.model {
        ModelSource::File(path) => Box::new(LinearModel::load(path)?),
        ModelSource::Remote(url) => Box::new(RemoteModel::new(url.clone())),
    };
    log::info!("loaded model: {}", predictor.describe());
    Ok(predictor)
}
