//! Rule-Based Knowledge
//!
//! Symptom translation, token implications and the built-in rule set.

use once_cell::sync::Lazy;

use super::types::{Rule, Token, TokenSet};
use crate::logic::knowledge::{Cause, Symptom};

// ============================================================================
// TRANSLATION
// ============================================================================

fn token_for(symptom: Symptom) -> Token {
    match symptom {
        Symptom::NoInternet => Token::NoInternet,
        Symptom::PacketLoss => Token::PacketLoss,
        Symptom::DnsError => Token::DnsError,
        Symptom::SlowPageLoad => Token::SlowPages,
        Symptom::WeakWifiSignal => Token::WeakSignal,
        Symptom::IntermittentConnection => Token::Intermittent,
        Symptom::SlowInternalServer => Token::SlowServer,
    }
}

/// UI symptoms -> tokens, plus combination tokens from co-occurrence
pub fn translate(symptoms: &[Symptom]) -> TokenSet {
    let mut tokens: TokenSet = symptoms.iter().map(|s| token_for(*s)).collect();

    let has = |t: Token, set: &TokenSet| set.contains(&t);

    if has(Token::NoInternet, &tokens) {
        if has(Token::PacketLoss, &tokens) {
            tokens.insert(Token::PingFails);
        } else {
            tokens.insert(Token::PingOk);
        }
    }
    if has(Token::Intermittent, &tokens) && has(Token::WeakSignal, &tokens) {
        tokens.insert(Token::Wifi);
    }
    if has(Token::SlowPages, &tokens) && has(Token::SlowServer, &tokens) {
        tokens.insert(Token::ServerSaturated);
    }

    tokens
}

// ============================================================================
// INFERENCE
// ============================================================================

/// token => implied tokens
const IMPLICATIONS: &[(Token, &[Token])] = &[
    (Token::NoInternet, &[Token::PagesDontLoad]),
    (Token::DnsError, &[Token::PagesDontLoad, Token::BadDnsConfig]),
];

/// Expand with implied tokens until nothing new appears
pub fn infer(tokens: &TokenSet) -> TokenSet {
    let mut expanded = tokens.clone();
    loop {
        let before = expanded.len();
        for (premise, implied) in IMPLICATIONS {
            if expanded.contains(premise) {
                expanded.extend(implied.iter().copied());
            }
        }
        if expanded.len() == before {
            return expanded;
        }
    }
}

// ============================================================================
// BUILT-IN RULES
// ============================================================================

pub static BUILTIN_RULES: Lazy<Vec<Rule>> = Lazy::new(builtin_rules);

fn builtin_rules() -> Vec<Rule> {
    use Token::*;

    vec![
        Rule::new(1, &[PingFails, PagesDontLoad], Cause::RouterFailure, 1),
        Rule::new(2, &[DnsError, BadDnsConfig], Cause::BadDnsConfig, 1),
        Rule::new(3, &[Wifi], Cause::WifiInterference, 1),
        Rule::new(4, &[PingOk, PagesDontLoad], Cause::IspProblems, 2),
        Rule::new(5, &[ServerSaturated], Cause::ServerOverload, 2),
        Rule::new(6, &[SlowPages, PacketLoss], Cause::NetworkCongestion, 2),
        Rule::new(7, &[PacketLoss, PingFails], Cause::DefectiveHardware, 2),
        Rule::new(8, &[PacketLoss, Intermittent], Cause::DefectiveHardware, 3),
        Rule::new(9, &[NoInternet, Intermittent], Cause::InfrastructureFailure, 3),
        Rule::new(10, &[SlowServer, Intermittent], Cause::InfrastructureFailure, 3),
        Rule::new(11, &[WeakSignal], Cause::WifiInterference, 3),
        Rule::new(12, &[SlowPages, DnsError, Intermittent], Cause::Malware, 4),
        Rule::new(13, &[SlowServer], Cause::ServerOverload, 4),
    ]
}
