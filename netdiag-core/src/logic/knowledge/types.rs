//! Knowledge Types
//!
//! Closed enumerations for symptoms and causes.
//! Only data structures - the association tables live in `tables.rs`.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseError;

// ============================================================================
// SYMPTOM
// ============================================================================

/// User-observable network problem
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Symptom {
    #[serde(rename = "No internet")]
    NoInternet,
    #[serde(rename = "Packet loss")]
    PacketLoss,
    #[serde(rename = "DNS error")]
    DnsError,
    #[serde(rename = "Slow page load")]
    SlowPageLoad,
    #[serde(rename = "Weak Wi-Fi signal")]
    WeakWifiSignal,
    #[serde(rename = "Intermittent connection")]
    IntermittentConnection,
    #[serde(rename = "Slow internal server")]
    SlowInternalServer,
}

impl Symptom {
    pub const ALL: [Symptom; 7] = [
        Symptom::NoInternet,
        Symptom::PacketLoss,
        Symptom::DnsError,
        Symptom::SlowPageLoad,
        Symptom::WeakWifiSignal,
        Symptom::IntermittentConnection,
        Symptom::SlowInternalServer,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Symptom::NoInternet => "No internet",
            Symptom::PacketLoss => "Packet loss",
            Symptom::DnsError => "DNS error",
            Symptom::SlowPageLoad => "Slow page load",
            Symptom::WeakWifiSignal => "Weak Wi-Fi signal",
            Symptom::IntermittentConnection => "Intermittent connection",
            Symptom::SlowInternalServer => "Slow internal server",
        }
    }
}

impl std::fmt::Display for Symptom {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Symptom {
    type Err = ParseError;

    /// Labels are matched ignoring case and surrounding whitespace
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Symptom::ALL
            .iter()
            .copied()
            .find(|symptom| symptom.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ParseError::UnknownSymptom(s.to_string()))
    }
}

impl<'de> Deserialize<'de> for Symptom {
    /// Same matching rules as `FromStr`
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let label = String::deserialize(deserializer)?;
        label.parse().map_err(serde::de::Error::custom)
    }
}

// ============================================================================
// CAUSE
// ============================================================================

/// Underlying fault behind one or more symptoms
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Cause {
    #[serde(rename = "Router failure")]
    RouterFailure,
    #[serde(rename = "ISP problems")]
    IspProblems,
    #[serde(rename = "Defective hardware")]
    DefectiveHardware,
    #[serde(rename = "Bad DNS configuration")]
    BadDnsConfig,
    #[serde(rename = "Wi-Fi interference")]
    WifiInterference,
    #[serde(rename = "Server overload")]
    ServerOverload,
    #[serde(rename = "Malware")]
    Malware,
    #[serde(rename = "Network congestion")]
    NetworkCongestion,
    #[serde(rename = "Infrastructure failure")]
    InfrastructureFailure,
}

impl Cause {
    pub const ALL: [Cause; 9] = [
        Cause::RouterFailure,
        Cause::IspProblems,
        Cause::DefectiveHardware,
        Cause::BadDnsConfig,
        Cause::WifiInterference,
        Cause::ServerOverload,
        Cause::Malware,
        Cause::NetworkCongestion,
        Cause::InfrastructureFailure,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Cause::RouterFailure => "Router failure",
            Cause::IspProblems => "ISP problems",
            Cause::DefectiveHardware => "Defective hardware",
            Cause::BadDnsConfig => "Bad DNS configuration",
            Cause::WifiInterference => "Wi-Fi interference",
            Cause::ServerOverload => "Server overload",
            Cause::Malware => "Malware",
            Cause::NetworkCongestion => "Network congestion",
            Cause::InfrastructureFailure => "Infrastructure failure",
        }
    }
}

impl std::fmt::Display for Cause {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

// ============================================================================
// FINDING (what a result entry names)
// ============================================================================

/// A diagnosed cause, or one of the two fallback verdicts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Finding {
    Known(Cause),
    /// Nothing to go on (empty input)
    GeneralProblem,
    /// Input present but no rule recognised it
    Unidentified,
}

impl Finding {
    pub fn label(&self) -> &'static str {
        match self {
            Finding::Known(cause) => cause.label(),
            Finding::GeneralProblem => "General network problem",
            Finding::Unidentified => "Unidentified problem",
        }
    }

    pub fn cause(&self) -> Option<Cause> {
        match self {
            Finding::Known(cause) => Some(*cause),
            _ => None,
        }
    }
}

impl From<Cause> for Finding {
    fn from(cause: Cause) -> Self {
        Finding::Known(cause)
    }
}

impl std::fmt::Display for Finding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl Serialize for Finding {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

impl<'de> Deserialize<'de> for Finding {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let label = String::deserialize(deserializer)?;
        if label == Finding::GeneralProblem.label() {
            return Ok(Finding::GeneralProblem);
        }
        if label == Finding::Unidentified.label() {
            return Ok(Finding::Unidentified);
        }
        Cause::ALL
            .iter()
            .copied()
            .find(|cause| cause.label() == label)
            .map(Finding::Known)
            .ok_or_else(|| serde::de::Error::custom(format!("unknown cause '{}'", label)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symptom_label_roundtrip_via_serde() {
        let json = serde_json::to_string(&Symptom::WeakWifiSignal).unwrap();
        assert_eq!(json, "\"Weak Wi-Fi signal\"");
        let back: Symptom = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Symptom::WeakWifiSignal);
    }

    #[test]
    fn test_symptom_from_str_is_case_insensitive() {
        assert_eq!("dns ERROR".parse::<Symptom>().unwrap(), Symptom::DnsError);
        assert_eq!("  Packet loss ".parse::<Symptom>().unwrap(), Symptom::PacketLoss);
        assert!("Printer on fire".parse::<Symptom>().is_err());
    }

    #[test]
    fn test_symptom_deserialize_matches_from_str() {
        let back: Symptom = serde_json::from_str("\"dns error\"").unwrap();
        assert_eq!(back, Symptom::DnsError);
        let back: Symptom = serde_json::from_str("\" No Internet \"").unwrap();
        assert_eq!(back, Symptom::NoInternet);

        let err = serde_json::from_str::<Symptom>("\"Printer on fire\"").unwrap_err();
        assert!(err.to_string().contains("Printer on fire"));
    }

    #[test]
    fn test_finding_serializes_as_label() {
        let json = serde_json::to_string(&Finding::Known(Cause::BadDnsConfig)).unwrap();
        assert_eq!(json, "\"Bad DNS configuration\"");
        let json = serde_json::to_string(&Finding::Unidentified).unwrap();
        assert_eq!(json, "\"Unidentified problem\"");
        let back: Finding = serde_json::from_str("\"General network problem\"").unwrap();
        assert_eq!(back, Finding::GeneralProblem);
    }

    #[test]
    fn test_labels_are_unique() {
        let mut labels: Vec<_> = Cause::ALL.iter().map(|c| c.label()).collect();
        labels.sort();
        labels.dedup();
        assert_eq!(labels.len(), Cause::ALL.len());
    }
}
