//! Input/output helpers.
//!
//! - batch CSV ingest + schema validation (`ingest`)
//! - batch prediction export (`export`)
//! - template and sample writers (`template`)

pub mod export;
pub mod ingest;
pub mod template;

pub use export::*;
pub use ingest::*;
pub use template::*;
