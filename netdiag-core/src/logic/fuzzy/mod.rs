//! Fuzzy Module
//!
//! Diagnosis from continuous measurements.
//!
//! ## Structure
//! - `membership`: membership functions, linguistic variables, input, fuzzification
//! - `rules`: the weighted rule base (constants only)
//! - `engine`: rule evaluation, max aggregation, normalization, certainty
//!
//! ## Usage
//! ```ignore
//! use netdiag_core::logic::fuzzy::{diagnose, FuzzyInput};
//!
//! let diag = diagnose(&FuzzyInput { dns_errors: 9.0, ..Default::default() });
//! println!("{:?}", diag.result.top());
//! ```

pub mod engine;
pub mod membership;
pub mod rules;

#[cfg(test)]
mod tests;

pub use engine::{
    diagnose, diagnose_with_rules, FiredRule, FuzzyDiagnosis, RankedCause, RuleOutput,
};
pub use membership::{
    fuzzify, trapmf, trimf, FuzzyInput, MembershipFn, MembershipProfile, Term, Variable,
};
pub use rules::{FuzzyRule, Level, FUZZY_RULES};
