//! Data sources that are not user input.

pub mod sample;

pub use sample::generate_sample;
