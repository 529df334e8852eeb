//! Error types
//!
//! The engines themselves never fail. Errors only arise when text from a
//! caller is turned into typed input, or when the static tables are
//! inconsistent.

use thiserror::Error;

use crate::logic::knowledge::{Cause, Symptom};

/// Caller-supplied text could not be mapped onto a closed enumeration
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unknown symptom '{0}'")]
    UnknownSymptom(String),

    #[error("unknown system type '{0}' (expected bayesian, fuzzy or rule-based)")]
    UnknownSystemType(String),
}

/// Knowledge base invariant violation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KnowledgeError {
    #[error("symptom '{0}' has no candidate causes")]
    SymptomWithoutCauses(Symptom),

    #[error("cause '{0}' is not reachable from any symptom")]
    OrphanCause(Cause),

    #[error("cause '{0}' has no recommended actions")]
    CauseWithoutActions(Cause),
}
