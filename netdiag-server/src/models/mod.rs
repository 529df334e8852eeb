//! Data models

pub mod diagnosis;

pub use diagnosis::*;
