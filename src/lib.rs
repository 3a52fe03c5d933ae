//! `salary-estimator` library crate.
//!
//! The binary (`salary`) is a thin wrapper around this library so that:
//!
//! - the encoder and pipeline are testable without spawning processes
//! - the model seam ([`models::Predictor`]) can be swapped without touching front-ends
//! - code stays easy to navigate as the project grows

pub mod app;
pub mod cli;
pub mod config;
pub mod data;
pub mod domain;
pub mod encode;
pub mod error;
pub mod gateway;
pub mod io;
pub mod models;
pub mod report;
pub mod tui;
