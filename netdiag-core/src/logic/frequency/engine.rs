//! Frequency Engine
//!
//! Ranks causes by how many of the observed symptoms implicate them.
//! Input: symptom list. Output: ranked causes with actions, no probabilities.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::logic::diagnosis::types::DiagnosisResult;
use crate::logic::knowledge::{Cause, Finding, KnowledgeBase, Symptom, KNOWLEDGE};

/// How many distinct input symptoms implicate a cause
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CauseCount {
    pub cause: Cause,
    pub count: usize,
}

/// Ranking plus the counts it was derived from
#[derive(Debug, Clone, PartialEq)]
pub struct FrequencyDiagnosis {
    pub result: DiagnosisResult,
    pub counts: Vec<CauseCount>,
}

// ============================================================================
// MAIN FUNCTION
// ============================================================================

/// Diagnose against the built-in knowledge base
pub fn diagnose(symptoms: &[Symptom]) -> FrequencyDiagnosis {
    diagnose_with(&KNOWLEDGE, symptoms)
}

/// Diagnose against an explicit knowledge base
pub fn diagnose_with(kb: &KnowledgeBase, symptoms: &[Symptom]) -> FrequencyDiagnosis {
    let symptoms = distinct(symptoms);

    let Some(first) = symptoms.first().copied() else {
        log::debug!("frequency: no symptoms, returning generic finding");
        return FrequencyDiagnosis {
            result: DiagnosisResult::single(Finding::GeneralProblem),
            counts: Vec::new(),
        };
    };

    // Accumulate in encounter order so ties stay deterministic
    let mut encountered: Vec<Cause> = Vec::new();
    let mut counts: HashMap<Cause, usize> = HashMap::new();
    for symptom in &symptoms {
        for cause in kb.causes_for(*symptom) {
            let count = counts.entry(*cause).or_insert(0);
            if *count == 0 {
                encountered.push(*cause);
            }
            *count += 1;
        }
    }

    let first_list = kb.causes_for(first);
    let mut ranked = encountered;
    // Stable sort: causes absent from the first list keep encounter order
    ranked.sort_by_key(|cause| {
        let tie_break = first_list
            .iter()
            .position(|c| c == cause)
            .unwrap_or(usize::MAX);
        (std::cmp::Reverse(counts[cause]), tie_break)
    });

    if symptoms.contains(&Symptom::DnsError) {
        promote(&mut ranked, Cause::BadDnsConfig);
    }

    log::debug!(
        "frequency: {} symptoms -> {} candidate causes, top = {:?}",
        symptoms.len(),
        ranked.len(),
        ranked.first()
    );

    let counts = ranked
        .iter()
        .map(|cause| CauseCount { cause: *cause, count: counts[cause] })
        .collect();

    FrequencyDiagnosis {
        result: DiagnosisResult::from_findings(ranked),
        counts,
    }
}

/// Move `cause` to the front if present and not already first
fn promote(ranked: &mut Vec<Cause>, cause: Cause) {
    if let Some(pos) = ranked.iter().position(|c| *c == cause) {
        if pos > 0 {
            let promoted = ranked.remove(pos);
            ranked.insert(0, promoted);
        }
    }
}

/// Drop repeated symptoms, keeping first occurrence
fn distinct(symptoms: &[Symptom]) -> Vec<Symptom> {
    let mut seen = Vec::with_capacity(symptoms.len());
    for symptom in symptoms {
        if !seen.contains(symptom) {
            seen.push(*symptom);
        }
    }
    seen
}

// ============================================================================
// TESTS
// ============================================================================
