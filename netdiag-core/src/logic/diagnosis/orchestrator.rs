//! Diagnosis Orchestrator
//!
//! Picks the engine for the requested system type and adapts its output
//! to the uniform `DiagnosisResult`.
//!
//! Probabilities on the frequency and rule-based paths are a display
//! heuristic (linear decay by rank). They are not statistical estimates;
//! only the fuzzy path produces normalized activation shares.

use super::thresholds::DiagnosisConfig;
use super::types::{
    CauseEntry, Diagnosis, DiagnosisRequest, DiagnosisResult, Explanation, SystemType,
};
use crate::logic::frequency;
use crate::logic::fuzzy::{self, FuzzyInput, RankedCause};
use crate::logic::knowledge::{Cause, Finding};
use crate::logic::rule_based;

// ============================================================================
// MAIN FUNCTION
// ============================================================================

pub fn diagnose(request: &DiagnosisRequest) -> Diagnosis {
    diagnose_with_config(request, &DiagnosisConfig::default())
}

pub fn diagnose_with_config(request: &DiagnosisRequest, config: &DiagnosisConfig) -> Diagnosis {
    log::debug!(
        "diagnose: system={} symptoms={:?} measurements={}",
        request.system,
        request.symptoms,
        request.measurements.is_some()
    );

    let (result, explanation) = match request.system {
        SystemType::Frequency => {
            let diag = frequency::diagnose(&request.symptoms);
            (
                with_rank_probabilities(diag.result, config),
                Explanation::Frequency { counts: diag.counts },
            )
        }

        SystemType::RuleBased => {
            let diag = rule_based::diagnose(&request.symptoms);
            (
                with_rank_probabilities(diag.result, config),
                Explanation::RuleBased {
                    tokens: diag.tokens.into_iter().collect(),
                    applied_rules: diag.applied_rules,
                },
            )
        }

        SystemType::Fuzzy => {
            let input = request
                .measurements
                .unwrap_or_else(|| FuzzyInput::from_symptoms(&request.symptoms));
            let diag = fuzzy::diagnose(&input);
            (
                apply_dns_override(diag.result, &input, config),
                Explanation::Fuzzy {
                    input,
                    profile: diag.profile,
                    fired_rules: diag.fired_rules,
                },
            )
        }
    };

    if let Some(top) = result.top() {
        log::info!(
            "diagnose: {} -> {} ({} causes)",
            request.system,
            top.cause,
            result.len()
        );
    }

    Diagnosis {
        system: request.system,
        result,
        explanation,
    }
}

// ============================================================================
// ADAPTERS
// ============================================================================

/// Attach rank-decayed display probabilities; certainty mirrors the top one
pub fn with_rank_probabilities(
    mut result: DiagnosisResult,
    config: &DiagnosisConfig,
) -> DiagnosisResult {
    for (rank, entry) in result.causes.iter_mut().enumerate() {
        entry.probability = Some(config.rank_probability(rank));
    }
    result.certainty = result.top().and_then(|entry| entry.probability);
    result
}

/// Force bad DNS config to the front when the raw DNS error rate is high.
///
/// Keyed off the raw measurement, not its membership degrees, so it can
/// disagree with what the fuzzy rules concluded. When the leader changes,
/// certainty is re-scored for the new leader.
pub fn apply_dns_override(
    mut result: DiagnosisResult,
    input: &FuzzyInput,
    config: &DiagnosisConfig,
) -> DiagnosisResult {
    if input.dns_errors <= config.dns_override_threshold {
        return result;
    }

    let dns = Finding::Known(Cause::BadDnsConfig);
    let leader_changed = match result.position(dns) {
        Some(0) => false,
        Some(pos) => {
            let entry = result.causes.remove(pos);
            result.causes.insert(0, entry);
            true
        }
        None => {
            result.causes.insert(
                0,
                CauseEntry::new(dns).with_probability(config.dns_override_probability),
            );
            true
        }
    };

    if leader_changed {
        result.certainty = Some(leader_certainty(&result));
    }

    log::debug!(
        "diagnose: DNS override applied ({:.1} errors/h > {:.1})",
        input.dns_errors,
        config.dns_override_threshold
    );

    result
}

/// Fuzzy certainty over the entries as currently ordered
fn leader_certainty(result: &DiagnosisResult) -> u8 {
    let ranking: Vec<RankedCause> = result
        .causes
        .iter()
        .filter_map(|entry| {
            let percentage = entry.probability.unwrap_or(0);
            Some(RankedCause {
                cause: entry.cause.cause()?,
                percentage,
                activation: f64::from(percentage) / 100.0,
            })
        })
        .collect();
    fuzzy::engine::certainty(&ranking)
}
