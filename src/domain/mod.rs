//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - the categorical features (`Category`) and the raw input record (`RawRecord`)
//! - the model-facing encoded row (`FeatureRow`) and its display twin (`DisplayRow`)
//! - batch policy, row errors, and the saved model artifact

pub mod types;

pub use types::*;
