//! Diagnosis Module
//!
//! Entry point for callers: dispatch to one engine, adapt to a uniform result.
//!
//! ## Structure
//! - `types`: request, result, explanation
//! - `thresholds`: post-processing settings
//! - `orchestrator`: dispatch and adaptation
//!
//! ## Usage
//! ```ignore
//! use netdiag_core::logic::diagnosis::{diagnose, DiagnosisRequest, SystemType};
//! use netdiag_core::logic::knowledge::Symptom;
//!
//! let req = DiagnosisRequest::new(vec![Symptom::DnsError], SystemType::Frequency);
//! let diag = diagnose(&req);
//! println!("{}", diag.result.top().unwrap().cause);
//! ```

pub mod orchestrator;
pub mod thresholds;
pub mod types;

pub use orchestrator::{
    apply_dns_override, diagnose, diagnose_with_config, with_rank_probabilities,
};
pub use thresholds::DiagnosisConfig;
pub use types::{
    CauseEntry, Diagnosis, DiagnosisRequest, DiagnosisResult, Explanation, SystemType,
};
