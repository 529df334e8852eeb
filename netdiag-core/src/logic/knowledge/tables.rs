//! Knowledge Tables
//!
//! Symptom -> cause associations and cause -> action catalog.
//! Built once on first access, never mutated afterwards.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use super::types::{Cause, Finding, Symptom};
use crate::error::KnowledgeError;

// ============================================================================
// RAW TABLES
// ============================================================================

/// Candidate causes per symptom. Order matters: earlier = more likely.
const SYMPTOM_CAUSES: &[(Symptom, &[Cause])] = &[
    (
        Symptom::NoInternet,
        &[
            Cause::RouterFailure,
            Cause::IspProblems,
            Cause::InfrastructureFailure,
            Cause::DefectiveHardware,
        ],
    ),
    (
        Symptom::PacketLoss,
        &[
            Cause::NetworkCongestion,
            Cause::RouterFailure,
            Cause::DefectiveHardware,
            Cause::WifiInterference,
        ],
    ),
    (
        Symptom::DnsError,
        &[Cause::BadDnsConfig, Cause::IspProblems, Cause::Malware],
    ),
    (
        Symptom::SlowPageLoad,
        &[
            Cause::NetworkCongestion,
            Cause::IspProblems,
            Cause::Malware,
            Cause::ServerOverload,
        ],
    ),
    (
        Symptom::WeakWifiSignal,
        &[
            Cause::WifiInterference,
            Cause::RouterFailure,
            Cause::DefectiveHardware,
        ],
    ),
    (
        Symptom::IntermittentConnection,
        &[
            Cause::WifiInterference,
            Cause::RouterFailure,
            Cause::IspProblems,
            Cause::InfrastructureFailure,
        ],
    ),
    (
        Symptom::SlowInternalServer,
        &[
            Cause::ServerOverload,
            Cause::NetworkCongestion,
            Cause::InfrastructureFailure,
            Cause::Malware,
        ],
    ),
];

const CAUSE_ACTIONS: &[(Cause, &[&str])] = &[
    (
        Cause::RouterFailure,
        &[
            "Restart the router and wait two minutes",
            "Check the router status LEDs",
            "Update the router firmware",
            "Replace the router if the fault persists",
        ],
    ),
    (
        Cause::IspProblems,
        &[
            "Check the provider's status page for outages",
            "Contact the internet service provider",
            "Verify the modem is synchronised",
        ],
    ),
    (
        Cause::DefectiveHardware,
        &[
            "Inspect and reseat network cables",
            "Test the network card on another machine",
            "Try a different switch port",
            "Replace damaged cables or adapters",
        ],
    ),
    (
        Cause::BadDnsConfig,
        &[
            "Check the configured DNS servers",
            "Switch to a public resolver (8.8.8.8 or 1.1.1.1)",
            "Flush the local DNS cache",
            "Verify DHCP hands out the right DNS servers",
        ],
    ),
    (
        Cause::WifiInterference,
        &[
            "Move closer to the access point",
            "Change the Wi-Fi channel",
            "Switch to the 5 GHz band",
            "Remove obstacles and interfering appliances",
        ],
    ),
    (
        Cause::ServerOverload,
        &[
            "Check CPU and memory usage on the server",
            "Restart stuck services",
            "Spread load across more instances",
        ],
    ),
    (
        Cause::Malware,
        &[
            "Run a full antivirus scan",
            "Look for unknown processes generating traffic",
            "Isolate infected machines from the network",
            "Change compromised passwords",
        ],
    ),
    (
        Cause::NetworkCongestion,
        &[
            "Identify devices using the most bandwidth",
            "Configure QoS to prioritise critical traffic",
            "Schedule heavy transfers outside peak hours",
            "Consider upgrading the link capacity",
        ],
    ),
    (
        Cause::InfrastructureFailure,
        &[
            "Check switches and core equipment",
            "Review the network topology for single points of failure",
            "Check power supply and UPS status",
            "Escalate to the infrastructure team",
        ],
    ),
];

const GENERAL_ACTIONS: &[&str] = &[
    "Restart the affected device",
    "Check that all cables are connected",
    "Restart the router",
    "Contact technical support if the problem persists",
];

const UNIDENTIFIED_ACTIONS: &[&str] = &[
    "Describe the symptoms in more detail",
    "Run basic connectivity tests (ping, traceroute)",
    "Check the system and router logs",
    "Contact the network administrator",
];

// ============================================================================
// KNOWLEDGE BASE
// ============================================================================

pub static KNOWLEDGE: Lazy<KnowledgeBase> = Lazy::new(KnowledgeBase::builtin);

/// Read-only lookup tables shared by all engines
#[derive(Debug, Clone)]
pub struct KnowledgeBase {
    symptom_causes: HashMap<Symptom, Vec<Cause>>,
    cause_actions: HashMap<Cause, Vec<&'static str>>,
}

impl KnowledgeBase {
    pub fn builtin() -> Self {
        Self::from_tables(SYMPTOM_CAUSES, CAUSE_ACTIONS)
    }

    pub fn from_tables(
        symptom_causes: &[(Symptom, &[Cause])],
        cause_actions: &[(Cause, &[&'static str])],
    ) -> Self {
        Self {
            symptom_causes: symptom_causes
                .iter()
                .map(|(symptom, causes)| (*symptom, causes.to_vec()))
                .collect(),
            cause_actions: cause_actions
                .iter()
                .map(|(cause, actions)| (*cause, actions.to_vec()))
                .collect(),
        }
    }

    /// Ordered candidate causes for a symptom
    pub fn causes_for(&self, symptom: Symptom) -> &[Cause] {
        self.symptom_causes
            .get(&symptom)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Recommended actions for a cause
    pub fn actions_for(&self, cause: Cause) -> &[&'static str] {
        self.cause_actions
            .get(&cause)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Actions for any finding, fallbacks included
    pub fn actions_for_finding(&self, finding: Finding) -> Vec<String> {
        let actions = match finding {
            Finding::Known(cause) => self.actions_for(cause),
            Finding::GeneralProblem => GENERAL_ACTIONS,
            Finding::Unidentified => UNIDENTIFIED_ACTIONS,
        };
        actions.iter().map(|a| a.to_string()).collect()
    }

    /// Check the three table invariants
    pub fn validate(&self) -> Result<(), KnowledgeError> {
        for symptom in Symptom::ALL {
            if self.causes_for(symptom).is_empty() {
                return Err(KnowledgeError::SymptomWithoutCauses(symptom));
            }
        }

        for cause in Cause::ALL {
            let reachable = Symptom::ALL
                .iter()
                .any(|s| self.causes_for(*s).contains(&cause));
            if !reachable {
                return Err(KnowledgeError::OrphanCause(cause));
            }
            if self.actions_for(cause).is_empty() {
                return Err(KnowledgeError::CauseWithoutActions(cause));
            }
        }

        Ok(())
    }
}

/// Validate the built-in tables
pub fn validate() -> Result<(), KnowledgeError> {
    KNOWLEDGE.validate()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_tables_are_consistent() {
        assert!(validate().is_ok());
    }

    #[test]
    fn test_every_symptom_has_causes() {
        for symptom in Symptom::ALL {
            assert!(!KNOWLEDGE.causes_for(symptom).is_empty(), "{} has no causes", symptom);
        }
    }

    #[test]
    fn test_action_lists_have_three_to_five_entries() {
        for cause in Cause::ALL {
            let n = KNOWLEDGE.actions_for(cause).len();
            assert!((3..=5).contains(&n), "{} has {} actions", cause, n);
        }
    }

    #[test]
    fn test_fallback_findings_have_four_actions() {
        assert_eq!(KNOWLEDGE.actions_for_finding(Finding::GeneralProblem).len(), 4);
        assert_eq!(KNOWLEDGE.actions_for_finding(Finding::Unidentified).len(), 4);
    }

    #[test]
    fn test_orphan_cause_is_reported() {
        let kb = KnowledgeBase::from_tables(
            &[(Symptom::NoInternet, &[Cause::RouterFailure])],
            CAUSE_ACTIONS,
        );
        assert!(matches!(kb.validate(), Err(KnowledgeError::SymptomWithoutCauses(_))));

        let all_symptoms: Vec<(Symptom, &[Cause])> = Symptom::ALL
            .iter()
            .map(|s| (*s, &[Cause::RouterFailure] as &[Cause]))
            .collect();
        let kb = KnowledgeBase::from_tables(&all_symptoms, CAUSE_ACTIONS);
        assert_eq!(kb.validate(), Err(KnowledgeError::OrphanCause(Cause::IspProblems)));
    }

    #[test]
    fn test_missing_actions_are_reported() {
        let kb = KnowledgeBase::from_tables(SYMPTOM_CAUSES, &[]);
        assert_eq!(
            kb.validate(),
            Err(KnowledgeError::CauseWithoutActions(Cause::RouterFailure))
        );
    }
}
