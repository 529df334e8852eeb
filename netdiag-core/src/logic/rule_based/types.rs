//! Rule-Based Types
//!
//! Symbolic tokens, rules and match reports. No logic here.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::logic::knowledge::Cause;

// ============================================================================
// TOKENS
// ============================================================================

/// Internal symbolic fact derived from UI symptoms
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Token {
    // One per symptom
    NoInternet,
    PacketLoss,
    DnsError,
    SlowPages,
    WeakSignal,
    Intermittent,
    SlowServer,

    // Combinations
    PingFails,
    PingOk,
    Wifi,
    ServerSaturated,

    // Inferred
    PagesDontLoad,
    BadDnsConfig,
}

impl Token {
    pub fn as_str(&self) -> &'static str {
        match self {
            Token::NoInternet => "no-internet",
            Token::PacketLoss => "packet-loss",
            Token::DnsError => "dns-error",
            Token::SlowPages => "slow-pages",
            Token::WeakSignal => "weak-signal",
            Token::Intermittent => "intermittent",
            Token::SlowServer => "slow-server",
            Token::PingFails => "ping-fails",
            Token::PingOk => "ping-ok",
            Token::Wifi => "wifi",
            Token::ServerSaturated => "server-saturated",
            Token::PagesDontLoad => "pages-dont-load",
            Token::BadDnsConfig => "bad-dns-config",
        }
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

pub type TokenSet = BTreeSet<Token>;

// ============================================================================
// RULES
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    pub id: u32,
    pub conditions: TokenSet,
    pub cause: Cause,
    /// Lower = higher priority
    pub priority: u8,
}

impl Rule {
    pub fn new(id: u32, conditions: &[Token], cause: Cause, priority: u8) -> Self {
        Self {
            id,
            conditions: conditions.iter().copied().collect(),
            cause,
            priority,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchKind {
    /// Every condition present
    Exact,
    /// Some but not all conditions present
    Partial,
}

// ============================================================================
// MATCH REPORT
// ============================================================================

/// Why a rule was considered, for explanation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppliedRule {
    pub rule_id: u32,
    pub priority: u8,
    pub kind: MatchKind,
    pub conditions: Vec<Token>,
    pub present: Vec<Token>,
    pub missing: Vec<Token>,
    pub cause: Cause,
    pub action: String,
    /// False when an earlier rule already produced the same cause
    pub selected: bool,
}
