//! Categorical encoding.
//!
//! - fixed label → code tables (`tables`)
//! - record → model feature row (`encoder`)
//! - record → display row, for presentation only (`display`)

pub mod display;
pub mod encoder;
pub mod tables;

pub use display::*;
pub use encoder::*;
pub use tables::{CategoryTable, table};
