//! Reporting: formatted terminal output for estimates, batches and category listings.

pub mod format;

pub use format::*;
