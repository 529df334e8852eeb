//! Frequency Module
//!
//! Symptom-count ranking ("bayesian" on the wire, though nothing here
//! is probabilistic).

pub mod engine;

pub use engine::{diagnose, diagnose_with, CauseCount, FrequencyDiagnosis};
