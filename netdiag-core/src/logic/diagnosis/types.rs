//! Diagnosis Types
//!
//! Uniform result shape returned by every engine path.
//! No logic here - only data structures.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseError;
use crate::logic::frequency::CauseCount;
use crate::logic::fuzzy::{FiredRule, FuzzyInput, MembershipProfile};
use crate::logic::knowledge::{Finding, Symptom, KNOWLEDGE};
use crate::logic::rule_based::{AppliedRule, Token};

// ============================================================================
// SYSTEM TYPE
// ============================================================================

/// Which inference engine to run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SystemType {
    /// Frequency ranking (historically called "bayesian")
    #[serde(rename = "bayesian", alias = "frequency")]
    Frequency,
    #[serde(rename = "fuzzy")]
    Fuzzy,
    #[serde(rename = "rule-based")]
    RuleBased,
}

impl SystemType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SystemType::Frequency => "bayesian",
            SystemType::Fuzzy => "fuzzy",
            SystemType::RuleBased => "rule-based",
        }
    }
}

impl std::fmt::Display for SystemType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SystemType {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bayesian" | "frequency" => Ok(SystemType::Frequency),
            "fuzzy" => Ok(SystemType::Fuzzy),
            "rule-based" => Ok(SystemType::RuleBased),
            other => Err(ParseError::UnknownSystemType(other.to_string())),
        }
    }
}

// ============================================================================
// REQUEST
// ============================================================================

/// Typed diagnosis request (already validated)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagnosisRequest {
    #[serde(rename = "sintomas", alias = "symptoms")]
    pub symptoms: Vec<Symptom>,

    #[serde(rename = "systemType")]
    pub system: SystemType,

    /// Continuous measurements for the fuzzy engine
    #[serde(
        rename = "mediciones",
        alias = "measurements",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub measurements: Option<FuzzyInput>,
}

impl DiagnosisRequest {
    pub fn new(symptoms: Vec<Symptom>, system: SystemType) -> Self {
        Self {
            symptoms,
            system,
            measurements: None,
        }
    }

    pub fn with_measurements(mut self, measurements: FuzzyInput) -> Self {
        self.measurements = Some(measurements);
        self
    }
}

// ============================================================================
// RESULT
// ============================================================================

/// One ranked entry of a diagnosis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CauseEntry {
    #[serde(rename = "causa")]
    pub cause: Finding,

    #[serde(rename = "acciones")]
    pub actions: Vec<String>,

    /// Integer percentage; meaning depends on the engine path
    #[serde(rename = "probabilidad", default, skip_serializing_if = "Option::is_none")]
    pub probability: Option<u8>,
}

impl CauseEntry {
    /// Entry with the catalog actions and no probability
    pub fn new(cause: impl Into<Finding>) -> Self {
        let cause = cause.into();
        Self {
            cause,
            actions: KNOWLEDGE.actions_for_finding(cause),
            probability: None,
        }
    }

    pub fn with_probability(mut self, probability: u8) -> Self {
        self.probability = Some(probability);
        self
    }
}

/// Ranked causes, most probable first
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DiagnosisResult {
    #[serde(rename = "causas")]
    pub causes: Vec<CauseEntry>,

    /// Overall confidence in the top entry (60-100)
    #[serde(rename = "certeza", default, skip_serializing_if = "Option::is_none")]
    pub certainty: Option<u8>,
}

impl DiagnosisResult {
    /// Result holding a single finding (used by the fallbacks)
    pub fn single(finding: Finding) -> Self {
        Self {
            causes: vec![CauseEntry::new(finding)],
            certainty: None,
        }
    }

    pub fn from_findings<I, F>(findings: I) -> Self
    where
        I: IntoIterator<Item = F>,
        F: Into<Finding>,
    {
        Self {
            causes: findings.into_iter().map(CauseEntry::new).collect(),
            certainty: None,
        }
    }

    pub fn top(&self) -> Option<&CauseEntry> {
        self.causes.first()
    }

    pub fn findings(&self) -> Vec<Finding> {
        self.causes.iter().map(|entry| entry.cause).collect()
    }

    pub fn position(&self, finding: Finding) -> Option<usize> {
        self.causes.iter().position(|entry| entry.cause == finding)
    }

    pub fn is_empty(&self) -> bool {
        self.causes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.causes.len()
    }
}

// ============================================================================
// EXPLANATION
// ============================================================================

/// Engine-specific trace of how the ranking came about
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "sistema", rename_all = "kebab-case")]
pub enum Explanation {
    #[serde(rename = "bayesian")]
    Frequency {
        counts: Vec<CauseCount>,
    },
    Fuzzy {
        input: FuzzyInput,
        profile: MembershipProfile,
        fired_rules: Vec<FiredRule>,
    },
    RuleBased {
        tokens: Vec<Token>,
        applied_rules: Vec<AppliedRule>,
    },
}

/// Orchestrator output: the uniform result plus its explanation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Diagnosis {
    pub system: SystemType,
    pub result: DiagnosisResult,
    pub explanation: Explanation,
}
