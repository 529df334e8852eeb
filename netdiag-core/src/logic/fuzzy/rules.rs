//! Fuzzy Rule Base
//!
//! 26 weighted IF-THEN rules. Constants only - evaluation lives in `engine.rs`.

use serde::{Deserialize, Serialize};

use super::membership::{Term, Variable};
use crate::logic::knowledge::Cause;

// ============================================================================
// CONSEQUENT LEVELS
// ============================================================================

/// Strength of a rule's conclusion about one cause
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Low,
    Medium,
    High,
}

impl Level {
    pub fn weight(&self) -> f64 {
        match self {
            Level::Low => 0.1,
            Level::Medium => 0.5,
            Level::High => 0.9,
        }
    }
}

/// Confidence multiplier for ordinary rules
pub const DEFAULT_CONFIDENCE: f64 = 1.0;

// ============================================================================
// RULE DEFINITION
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FuzzyRule {
    pub id: u8,
    pub description: &'static str,
    /// All must hold (AND = min)
    pub antecedents: &'static [(Variable, Term)],
    pub consequents: &'static [(Cause, Level)],
    /// Boost for especially diagnostic combinations
    pub confidence: f64,
}

use Cause::*;
use Level::{High, Low, Medium};
use Variable::*;

const ALL_CAUSES_MEDIUM: &[(Cause, Level)] = &[
    (RouterFailure, Medium),
    (IspProblems, Medium),
    (DefectiveHardware, Medium),
    (BadDnsConfig, Medium),
    (WifiInterference, Medium),
    (ServerOverload, Medium),
    (Malware, Medium),
    (NetworkCongestion, Medium),
    (InfrastructureFailure, Medium),
];

pub const FUZZY_RULES: &[FuzzyRule] = &[
    FuzzyRule {
        id: 1,
        description: "Total outage with no throughput",
        antecedents: &[(Connectivity, Term::None), (Throughput, Term::VeryLow)],
        consequents: &[(RouterFailure, High), (IspProblems, High), (InfrastructureFailure, Medium)],
        confidence: 1.3,
    },
    FuzzyRule {
        id: 2,
        description: "No connectivity and heavy packet loss",
        antecedents: &[(Connectivity, Term::None), (PacketLoss, Term::High)],
        consequents: &[(RouterFailure, High), (DefectiveHardware, Medium)],
        confidence: 1.2,
    },
    FuzzyRule {
        id: 3,
        description: "No connectivity despite a strong Wi-Fi signal",
        antecedents: &[(Connectivity, Term::None), (WifiSignal, Term::Strong)],
        consequents: &[(IspProblems, High), (RouterFailure, Medium)],
        confidence: DEFAULT_CONFIDENCE,
    },
    FuzzyRule {
        id: 4,
        description: "No connectivity with a weak Wi-Fi signal",
        antecedents: &[(Connectivity, Term::None), (WifiSignal, Term::Weak)],
        consequents: &[(RouterFailure, High), (WifiInterference, Medium)],
        confidence: DEFAULT_CONFIDENCE,
    },
    FuzzyRule {
        id: 5,
        description: "Intermittent link on a weak Wi-Fi signal",
        antecedents: &[(Connectivity, Term::Intermittent), (WifiSignal, Term::Weak)],
        consequents: &[(WifiInterference, High), (RouterFailure, Low)],
        confidence: 1.4,
    },
    FuzzyRule {
        id: 6,
        description: "Intermittent link on a strong Wi-Fi signal",
        antecedents: &[(Connectivity, Term::Intermittent), (WifiSignal, Term::Strong)],
        consequents: &[
            (IspProblems, Medium),
            (InfrastructureFailure, Medium),
            (RouterFailure, Medium),
        ],
        confidence: DEFAULT_CONFIDENCE,
    },
    FuzzyRule {
        id: 7,
        description: "Intermittent link with moderate packet loss",
        antecedents: &[(Connectivity, Term::Intermittent), (PacketLoss, Term::Medium)],
        consequents: &[(DefectiveHardware, Medium), (NetworkCongestion, Medium)],
        confidence: DEFAULT_CONFIDENCE,
    },
    FuzzyRule {
        id: 8,
        description: "Heavy packet loss and low throughput",
        antecedents: &[(PacketLoss, Term::High), (Throughput, Term::Low)],
        consequents: &[(NetworkCongestion, High), (DefectiveHardware, Medium)],
        confidence: DEFAULT_CONFIDENCE,
    },
    FuzzyRule {
        id: 9,
        description: "Heavy packet loss on a weak Wi-Fi signal",
        antecedents: &[(PacketLoss, Term::High), (WifiSignal, Term::Weak)],
        consequents: &[(WifiInterference, High), (DefectiveHardware, Medium)],
        confidence: DEFAULT_CONFIDENCE,
    },
    FuzzyRule {
        id: 10,
        description: "Moderate packet loss and high server latency",
        antecedents: &[(PacketLoss, Term::Medium), (ServerLatency, Term::High)],
        consequents: &[(NetworkCongestion, High), (ServerOverload, Medium)],
        confidence: DEFAULT_CONFIDENCE,
    },
    FuzzyRule {
        id: 11,
        description: "Frequent DNS errors",
        antecedents: &[(DnsErrors, Term::Frequent)],
        consequents: &[(BadDnsConfig, High), (IspProblems, Low)],
        confidence: DEFAULT_CONFIDENCE,
    },
    FuzzyRule {
        id: 12,
        description: "Critical DNS error rate",
        antecedents: &[(DnsErrors, Term::Critical)],
        consequents: &[(BadDnsConfig, High), (Malware, Medium)],
        confidence: 1.3,
    },
    FuzzyRule {
        id: 13,
        description: "Occasional DNS errors with slow pages",
        antecedents: &[(DnsErrors, Term::Occasional), (PageLoad, Term::Slow)],
        consequents: &[(BadDnsConfig, Medium), (IspProblems, Medium)],
        confidence: DEFAULT_CONFIDENCE,
    },
    FuzzyRule {
        id: 14,
        description: "Critical DNS errors on an otherwise stable link",
        antecedents: &[(DnsErrors, Term::Critical), (Connectivity, Term::Stable)],
        consequents: &[(BadDnsConfig, High)],
        confidence: 1.5,
    },
    FuzzyRule {
        id: 15,
        description: "Slow pages and low throughput",
        antecedents: &[(PageLoad, Term::Slow), (Throughput, Term::Low)],
        consequents: &[(NetworkCongestion, High), (IspProblems, Medium)],
        confidence: DEFAULT_CONFIDENCE,
    },
    FuzzyRule {
        id: 16,
        description: "Slow pages and high server latency",
        antecedents: &[(PageLoad, Term::Slow), (ServerLatency, Term::High)],
        consequents: &[(ServerOverload, High), (InfrastructureFailure, Medium)],
        confidence: 1.2,
    },
    FuzzyRule {
        id: 17,
        description: "Slow pages with frequent DNS errors",
        antecedents: &[(PageLoad, Term::Slow), (DnsErrors, Term::Frequent)],
        consequents: &[(Malware, Medium), (BadDnsConfig, Medium)],
        confidence: DEFAULT_CONFIDENCE,
    },
    FuzzyRule {
        id: 18,
        description: "High server latency on a stable link",
        antecedents: &[(ServerLatency, Term::High), (Connectivity, Term::Stable)],
        consequents: &[(ServerOverload, High)],
        confidence: 1.3,
    },
    FuzzyRule {
        id: 19,
        description: "High server latency with moderate packet loss",
        antecedents: &[(ServerLatency, Term::High), (PacketLoss, Term::Medium)],
        consequents: &[(InfrastructureFailure, High), (NetworkCongestion, Medium)],
        confidence: DEFAULT_CONFIDENCE,
    },
    FuzzyRule {
        id: 20,
        description: "Moderate server latency with normal page loads",
        antecedents: &[(ServerLatency, Term::Medium), (PageLoad, Term::Normal)],
        consequents: &[(ServerOverload, Medium), (NetworkCongestion, Low)],
        confidence: DEFAULT_CONFIDENCE,
    },
    FuzzyRule {
        id: 21,
        description: "Stable link but almost no throughput and slow pages",
        antecedents: &[
            (Throughput, Term::VeryLow),
            (Connectivity, Term::Stable),
            (PageLoad, Term::Slow),
        ],
        consequents: &[(Malware, High), (NetworkCongestion, Medium)],
        confidence: 1.2,
    },
    FuzzyRule {
        id: 22,
        description: "Low throughput on a medium Wi-Fi signal",
        antecedents: &[(Throughput, Term::Low), (WifiSignal, Term::Medium)],
        consequents: &[(WifiInterference, Medium), (NetworkCongestion, Medium)],
        confidence: DEFAULT_CONFIDENCE,
    },
    FuzzyRule {
        id: 23,
        description: "Light packet loss on an intermittent link",
        antecedents: &[(PacketLoss, Term::Low), (Connectivity, Term::Intermittent)],
        consequents: &[(DefectiveHardware, Medium), (RouterFailure, Low)],
        confidence: DEFAULT_CONFIDENCE,
    },
    FuzzyRule {
        id: 24,
        description: "High latency, no throughput and sporadic DNS errors",
        antecedents: &[
            (ServerLatency, Term::High),
            (Throughput, Term::VeryLow),
            (DnsErrors, Term::Occasional),
        ],
        consequents: &[(Malware, High)],
        confidence: 1.3,
    },
    FuzzyRule {
        id: 25,
        description: "No connectivity and high internal latency",
        antecedents: &[(Connectivity, Term::None), (ServerLatency, Term::High)],
        consequents: &[(InfrastructureFailure, High), (RouterFailure, Medium)],
        confidence: DEFAULT_CONFIDENCE,
    },
    FuzzyRule {
        id: 26,
        description: "Every measurement in the middle band: genuinely ambiguous",
        antecedents: &[
            (Connectivity, Term::Intermittent),
            (Throughput, Term::Medium),
            (PacketLoss, Term::Medium),
            (DnsErrors, Term::Occasional),
            (WifiSignal, Term::Medium),
            (PageLoad, Term::Normal),
            (ServerLatency, Term::Medium),
        ],
        consequents: ALL_CAUSES_MEDIUM,
        confidence: DEFAULT_CONFIDENCE,
    },
];
