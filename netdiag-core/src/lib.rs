//! NetDiag Core
//!
//! Maps observed network symptoms onto ranked root causes and remediation
//! actions with three independent engines: frequency ranking, fuzzy
//! inference and symbolic rules.
//!
//! Every engine is a pure function over immutable tables; calls share no
//! mutable state and can run concurrently.

pub mod constants;
pub mod error;
pub mod logic;

pub use error::{KnowledgeError, ParseError};
pub use logic::diagnosis::{
    diagnose, diagnose_with_config, CauseEntry, Diagnosis, DiagnosisConfig, DiagnosisRequest,
    DiagnosisResult, Explanation, SystemType,
};
pub use logic::fuzzy::FuzzyInput;
pub use logic::knowledge::{Cause, Finding, Symptom};
