//! Fuzzy Inference Engine
//!
//! fuzzify -> evaluate rules (min, x confidence) -> aggregate (max)
//! -> normalize to percentages -> rank -> certainty.

use std::collections::BTreeMap;

use serde::Serialize;

use super::membership::{fuzzify, FuzzyInput, MembershipProfile};
use super::rules::{FuzzyRule, FUZZY_RULES};
use crate::logic::diagnosis::types::{CauseEntry, DiagnosisResult};
use crate::logic::knowledge::Cause;

// ============================================================================
// CONSTANTS
// ============================================================================

/// Certainty never drops below this when two or more causes compete
pub const CERTAINTY_FLOOR: f64 = 60.0;

/// Base certainty for a single surviving cause
pub const SINGLE_CAUSE_CERTAINTY: f64 = 95.0;

/// Spread (mean absolute deviation, in points) at which no penalty applies
pub const SPREAD_REFERENCE: f64 = 20.0;

// ============================================================================
// OUTPUT TYPES
// ============================================================================

/// What one consequent of a fired rule contributed
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RuleOutput {
    pub cause: Cause,
    pub strength: f64,
}

/// A rule that fired with non-zero activation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FiredRule {
    pub id: u8,
    pub description: &'static str,
    pub activation: f64,
    pub outputs: Vec<RuleOutput>,
}

/// Cause with its normalized share
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankedCause {
    pub cause: Cause,
    pub percentage: u8,
    /// Aggregated (pre-normalization) activation
    pub activation: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FuzzyDiagnosis {
    pub result: DiagnosisResult,
    pub profile: MembershipProfile,
    pub fired_rules: Vec<FiredRule>,
    pub ranking: Vec<RankedCause>,
}

// ============================================================================
// MAIN FUNCTION
// ============================================================================

pub fn diagnose(input: &FuzzyInput) -> FuzzyDiagnosis {
    diagnose_with_rules(input, FUZZY_RULES)
}

pub fn diagnose_with_rules(input: &FuzzyInput, rules: &[FuzzyRule]) -> FuzzyDiagnosis {
    let profile = fuzzify(input);

    let fired_rules: Vec<FiredRule> = rules
        .iter()
        .filter_map(|rule| evaluate_rule(rule, &profile))
        .collect();

    let aggregated = aggregate(&fired_rules);
    let ranking = normalize(&aggregated);
    let certainty = certainty(&ranking);

    log::debug!(
        "fuzzy: {} of {} rules fired, {} causes ranked, certainty {}",
        fired_rules.len(),
        rules.len(),
        ranking.len(),
        certainty
    );

    let result = DiagnosisResult {
        causes: ranking
            .iter()
            .map(|r| CauseEntry::new(r.cause).with_probability(r.percentage))
            .collect(),
        certainty: Some(certainty),
    };

    FuzzyDiagnosis {
        result,
        profile,
        fired_rules,
        ranking,
    }
}

// ============================================================================
// PIPELINE STAGES
// ============================================================================

/// Activation = min(antecedents) x confidence. None when it does not fire.
pub fn evaluate_rule(rule: &FuzzyRule, profile: &MembershipProfile) -> Option<FiredRule> {
    if rule.antecedents.is_empty() {
        return None;
    }

    let strength = rule
        .antecedents
        .iter()
        .map(|(variable, term)| profile.degree(*variable, *term))
        .fold(f64::INFINITY, f64::min);
    let activation = strength * rule.confidence;

    if activation <= 0.0 {
        return None;
    }

    Some(FiredRule {
        id: rule.id,
        description: rule.description,
        activation,
        outputs: rule
            .consequents
            .iter()
            .map(|(cause, level)| RuleOutput {
                cause: *cause,
                strength: activation * level.weight(),
            })
            .collect(),
    })
}

/// Max-composition: each cause keeps its strongest conclusion
pub fn aggregate(fired: &[FiredRule]) -> BTreeMap<Cause, f64> {
    fired
        .iter()
        .flat_map(|rule| rule.outputs.iter())
        .fold(BTreeMap::new(), |mut acc, output| {
            let slot = acc.entry(output.cause).or_insert(0.0);
            if output.strength > *slot {
                *slot = output.strength;
            }
            acc
        })
}

/// Scale to integer percentages and sort descending.
/// Zero total activation yields every cause at 0 %.
pub fn normalize(aggregated: &BTreeMap<Cause, f64>) -> Vec<RankedCause> {
    let total: f64 = aggregated.values().sum();

    if total <= 0.0 || !total.is_finite() {
        log::warn!("fuzzy: no rule activation, reporting all causes at 0%");
        return Cause::ALL
            .iter()
            .map(|cause| RankedCause {
                cause: *cause,
                percentage: 0,
                activation: 0.0,
            })
            .collect();
    }

    let mut ranking: Vec<RankedCause> = Cause::ALL
        .iter()
        .filter_map(|cause| {
            let activation = aggregated.get(cause).copied().unwrap_or(0.0);
            (activation > 0.0).then(|| RankedCause {
                cause: *cause,
                percentage: (activation / total * 100.0).round().clamp(0.0, 100.0) as u8,
                activation,
            })
        })
        .collect();

    ranking.sort_by(|a, b| {
        b.percentage.cmp(&a.percentage).then_with(|| {
            b.activation
                .partial_cmp(&a.activation)
                .unwrap_or(std::cmp::Ordering::Equal)
        })
    });

    ranking
}

/// Overall confidence in the top cause, 60-100.
///
/// A lone cause scores 95-100 depending on how strongly it fired. Otherwise
/// the leader's share is penalised when the distribution is tightly clustered.
pub fn certainty(ranking: &[RankedCause]) -> u8 {
    let value = if ranking.len() < 2 {
        let top = ranking.first().map(|r| r.activation).unwrap_or(0.0);
        SINGLE_CAUSE_CERTAINTY + 5.0 * top.clamp(0.0, 1.0)
    } else {
        let n = ranking.len() as f64;
        let mean = ranking.iter().map(|r| r.percentage as f64).sum::<f64>() / n;
        let spread = ranking
            .iter()
            .map(|r| (r.percentage as f64 - mean).abs())
            .sum::<f64>()
            / n;
        let top = ranking[0].percentage as f64;
        (top - (SPREAD_REFERENCE - spread).max(0.0)).max(CERTAINTY_FLOOR)
    };

    value.clamp(CERTAINTY_FLOOR, 100.0).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::fuzzy::membership::{Term, Variable};
    use crate::logic::fuzzy::rules::Level;

    fn ranked(cause: Cause, percentage: u8, activation: f64) -> RankedCause {
        RankedCause { cause, percentage, activation }
    }

    #[test]
    fn test_aggregate_takes_max_not_sum() {
        let fired = vec![
            FiredRule {
                id: 1,
                description: "a",
                activation: 1.0,
                outputs: vec![RuleOutput { cause: Cause::Malware, strength: 0.5 }],
            },
            FiredRule {
                id: 2,
                description: "b",
                activation: 1.0,
                outputs: vec![RuleOutput { cause: Cause::Malware, strength: 0.4 }],
            },
        ];
        let aggregated = aggregate(&fired);
        assert_eq!(aggregated[&Cause::Malware], 0.5);
    }

    #[test]
    fn test_evaluate_rule_applies_min_and_confidence() {
        const RULE: FuzzyRule = FuzzyRule {
            id: 99,
            description: "test",
            antecedents: &[
                (Variable::Connectivity, Term::Intermittent),
                (Variable::WifiSignal, Term::Weak),
            ],
            consequents: &[(Cause::WifiInterference, Level::High)],
            confidence: 1.5,
        };
        let input = FuzzyInput {
            connectivity: 35.0, // intermittent = 0.5
            wifi_signal: 10.0,  // weak = 1.0
            ..Default::default()
        };
        let fired = evaluate_rule(&RULE, &fuzzify(&input)).unwrap();
        assert!((fired.activation - 0.75).abs() < 1e-9);
        assert!((fired.outputs[0].strength - 0.675).abs() < 1e-9);
    }

    #[test]
    fn test_rule_without_support_does_not_fire() {
        let input = FuzzyInput::default();
        let profile = fuzzify(&input);
        // Rule 1 needs no connectivity
        assert!(evaluate_rule(&FUZZY_RULES[0], &profile).is_none());
    }

    #[test]
    fn test_normalize_zero_total_is_guarded() {
        let ranking = normalize(&BTreeMap::new());
        assert_eq!(ranking.len(), Cause::ALL.len());
        assert!(ranking.iter().all(|r| r.percentage == 0));
    }

    #[test]
    fn test_normalize_drops_silent_causes() {
        let mut aggregated = BTreeMap::new();
        aggregated.insert(Cause::RouterFailure, 0.9);
        aggregated.insert(Cause::IspProblems, 0.3);
        aggregated.insert(Cause::Malware, 0.0);
        let ranking = normalize(&aggregated);
        assert_eq!(ranking.len(), 2);
        assert_eq!(ranking[0], ranked(Cause::RouterFailure, 75, 0.9));
        assert_eq!(ranking[1], ranked(Cause::IspProblems, 25, 0.3));
    }

    #[test]
    fn test_certainty_single_cause() {
        assert_eq!(certainty(&[ranked(Cause::Malware, 100, 1.2)]), 100);
        assert_eq!(certainty(&[ranked(Cause::Malware, 100, 0.4)]), 97);
        assert_eq!(certainty(&[]), 95);
    }

    #[test]
    fn test_certainty_clear_leader() {
        // mean 50, spread 30 -> no penalty
        let ranking = [ranked(Cause::BadDnsConfig, 80, 1.0), ranked(Cause::Malware, 20, 0.2)];
        assert_eq!(certainty(&ranking), 80);
    }

    #[test]
    fn test_certainty_clustered_hits_floor() {
        let ranking = [
            ranked(Cause::RouterFailure, 34, 0.5),
            ranked(Cause::IspProblems, 33, 0.5),
            ranked(Cause::Malware, 33, 0.5),
        ];
        assert_eq!(certainty(&ranking), 60);
    }
}
