//! Rule-Based Module
//!
//! Symbolic matching of symptom tokens against a prioritized rule set.
//!
//! ## Structure
//! - `types`: Token, Rule, MatchKind, AppliedRule
//! - `rules`: translation table, implications, built-in rules
//! - `engine`: matching, ordering, deduplication, fallbacks

pub mod engine;
pub mod rules;
pub mod types;

pub use engine::{builtin_rules, diagnose, match_kind, RuleBasedEngine, RuleDiagnosis};
pub use rules::{infer, translate, BUILTIN_RULES};
pub use types::{AppliedRule, MatchKind, Rule, Token, TokenSet};
