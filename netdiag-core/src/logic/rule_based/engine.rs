//! Rule-Based Engine
//!
//! symptoms -> tokens -> inferred tokens -> exact/partial rule matches
//! -> causes deduplicated in match order.

use std::collections::HashSet;

use once_cell::sync::Lazy;

use super::rules::{infer, translate, BUILTIN_RULES};
use super::types::{AppliedRule, MatchKind, Rule, Token, TokenSet};
use crate::logic::diagnosis::types::DiagnosisResult;
use crate::logic::knowledge::{Cause, Finding, Symptom, KNOWLEDGE};

static ENGINE: Lazy<RuleBasedEngine> = Lazy::new(RuleBasedEngine::new);

#[derive(Debug, Clone, PartialEq)]
pub struct RuleDiagnosis {
    pub result: DiagnosisResult,
    /// Token set after translation and inference
    pub tokens: TokenSet,
    /// Every matching rule in evaluation order, duplicates included
    pub applied_rules: Vec<AppliedRule>,
}

// ============================================================================
// RULE ENGINE
// ============================================================================

#[derive(Debug, Clone)]
pub struct RuleBasedEngine {
    rules: Vec<Rule>,
}

impl RuleBasedEngine {
    pub fn new() -> Self {
        Self::with_rules(BUILTIN_RULES.clone())
    }

    pub fn with_rules(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn diagnose(&self, symptoms: &[Symptom]) -> RuleDiagnosis {
        self.diagnose_tokens(&translate(symptoms))
    }

    /// Diagnose from already-translated tokens
    pub fn diagnose_tokens(&self, translated: &TokenSet) -> RuleDiagnosis {
        if translated.is_empty() {
            log::debug!("rule-based: no tokens, returning generic finding");
            return RuleDiagnosis {
                result: DiagnosisResult::single(Finding::GeneralProblem),
                tokens: TokenSet::new(),
                applied_rules: Vec::new(),
            };
        }

        let tokens = infer(translated);

        let mut exact: Vec<&Rule> = Vec::new();
        let mut partial: Vec<&Rule> = Vec::new();
        for rule in &self.rules {
            match match_kind(rule, &tokens) {
                Some(MatchKind::Exact) => exact.push(rule),
                Some(MatchKind::Partial) => partial.push(rule),
                None => {}
            }
        }
        exact.sort_by_key(|r| r.priority);
        partial.sort_by_key(|r| r.priority);

        log::debug!(
            "rule-based: tokens {:?} -> {} exact, {} partial matches",
            tokens,
            exact.len(),
            partial.len()
        );

        if exact.is_empty() && partial.is_empty() {
            return RuleDiagnosis {
                result: DiagnosisResult::single(Finding::Unidentified),
                tokens,
                applied_rules: Vec::new(),
            };
        }

        let mut seen: HashSet<Cause> = HashSet::new();
        let mut ranked: Vec<Cause> = Vec::new();
        let mut applied_rules = Vec::with_capacity(exact.len() + partial.len());

        let ordered = exact
            .iter()
            .map(|r| (*r, MatchKind::Exact))
            .chain(partial.iter().map(|r| (*r, MatchKind::Partial)));

        for (rule, kind) in ordered {
            let selected = seen.insert(rule.cause);
            if selected {
                ranked.push(rule.cause);
            }
            applied_rules.push(report(rule, kind, &tokens, selected));
        }

        RuleDiagnosis {
            result: DiagnosisResult::from_findings(ranked),
            tokens,
            applied_rules,
        }
    }
}

impl Default for RuleBasedEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Exact if all conditions hold, partial if some do
pub fn match_kind(rule: &Rule, tokens: &TokenSet) -> Option<MatchKind> {
    if rule.conditions.is_empty() {
        return None;
    }
    if rule.conditions.is_subset(tokens) {
        Some(MatchKind::Exact)
    } else if !rule.conditions.is_disjoint(tokens) {
        Some(MatchKind::Partial)
    } else {
        None
    }
}

fn report(rule: &Rule, kind: MatchKind, tokens: &TokenSet, selected: bool) -> AppliedRule {
    let (present, missing): (Vec<Token>, Vec<Token>) =
        rule.conditions.iter().partition(|t| tokens.contains(*t));

    AppliedRule {
        rule_id: rule.id,
        priority: rule.priority,
        kind,
        conditions: rule.conditions.iter().copied().collect(),
        present,
        missing,
        cause: rule.cause,
        action: KNOWLEDGE
            .actions_for(rule.cause)
            .first()
            .map(|a| a.to_string())
            .unwrap_or_default(),
        selected,
    }
}

// ============================================================================
// PUBLIC API
// ============================================================================

/// Diagnose with the built-in rule set
pub fn diagnose(symptoms: &[Symptom]) -> RuleDiagnosis {
    ENGINE.diagnose(symptoms)
}

/// The built-in rule set
pub fn builtin_rules() -> &'static [Rule] {
    ENGINE.rules()
}
