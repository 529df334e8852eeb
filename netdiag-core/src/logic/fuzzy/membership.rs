//! Fuzzification
//!
//! Turns the seven crisp measurements into linguistic membership degrees.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::logic::knowledge::Symptom;

// ============================================================================
// MEMBERSHIP FUNCTIONS
// ============================================================================

/// Trapezoid: 0 at `a`, 1 from `b` to `c`, 0 again at `d`
pub fn trapmf(x: f64, a: f64, b: f64, c: f64, d: f64) -> f64 {
    if x < a || x > d {
        0.0
    } else if x >= b && x <= c {
        1.0
    } else if x < b {
        (x - a) / (b - a)
    } else {
        (d - x) / (d - c)
    }
}

/// Triangle: 0 at `a`, peak 1 at `b`, 0 at `c`
pub fn trimf(x: f64, a: f64, b: f64, c: f64) -> f64 {
    if x < a || x > c {
        0.0
    } else if x == b {
        1.0
    } else if x < b {
        (x - a) / (b - a)
    } else {
        (c - x) / (c - b)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MembershipFn {
    Trapezoid(f64, f64, f64, f64),
    Triangle(f64, f64, f64),
}

impl MembershipFn {
    pub fn degree(&self, x: f64) -> f64 {
        match *self {
            MembershipFn::Trapezoid(a, b, c, d) => trapmf(x, a, b, c, d),
            MembershipFn::Triangle(a, b, c) => trimf(x, a, b, c),
        }
    }
}

// ============================================================================
// LINGUISTIC VARIABLES
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Variable {
    Connectivity,
    Throughput,
    PacketLoss,
    DnsErrors,
    WifiSignal,
    PageLoad,
    ServerLatency,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Term {
    None,
    Intermittent,
    Stable,
    VeryLow,
    Low,
    Medium,
    High,
    Occasional,
    Frequent,
    Critical,
    Weak,
    Strong,
    Fast,
    Normal,
    Slow,
}

use MembershipFn::{Trapezoid, Triangle};

const CONNECTIVITY_TERMS: &[(Term, MembershipFn)] = &[
    (Term::None, Trapezoid(0.0, 0.0, 10.0, 30.0)),
    (Term::Intermittent, Triangle(20.0, 50.0, 80.0)),
    (Term::Stable, Trapezoid(70.0, 90.0, 100.0, 100.0)),
];

const THROUGHPUT_TERMS: &[(Term, MembershipFn)] = &[
    (Term::VeryLow, Trapezoid(0.0, 0.0, 2.0, 8.0)),
    (Term::Low, Triangle(5.0, 15.0, 30.0)),
    (Term::Medium, Triangle(20.0, 45.0, 70.0)),
    (Term::High, Trapezoid(60.0, 80.0, 100.0, 100.0)),
];

const PACKET_LOSS_TERMS: &[(Term, MembershipFn)] = &[
    (Term::None, Trapezoid(0.0, 0.0, 1.0, 3.0)),
    (Term::Low, Triangle(1.0, 5.0, 10.0)),
    (Term::Medium, Triangle(5.0, 15.0, 30.0)),
    (Term::High, Trapezoid(20.0, 40.0, 100.0, 100.0)),
];

const DNS_ERROR_TERMS: &[(Term, MembershipFn)] = &[
    (Term::None, Trapezoid(0.0, 0.0, 0.5, 1.5)),
    (Term::Occasional, Triangle(0.5, 2.0, 4.0)),
    (Term::Frequent, Triangle(3.0, 5.0, 8.0)),
    (Term::Critical, Trapezoid(6.0, 8.0, 10.0, 10.0)),
];

const WIFI_SIGNAL_TERMS: &[(Term, MembershipFn)] = &[
    (Term::Weak, Trapezoid(0.0, 0.0, 20.0, 40.0)),
    (Term::Medium, Triangle(30.0, 50.0, 70.0)),
    (Term::Strong, Trapezoid(60.0, 80.0, 100.0, 100.0)),
];

const PAGE_LOAD_TERMS: &[(Term, MembershipFn)] = &[
    (Term::Fast, Trapezoid(0.0, 0.0, 800.0, 1500.0)),
    (Term::Normal, Triangle(1000.0, 2000.0, 3000.0)),
    (Term::Slow, Trapezoid(2500.0, 3500.0, 5000.0, 5000.0)),
];

const SERVER_LATENCY_TERMS: &[(Term, MembershipFn)] = &[
    (Term::Low, Trapezoid(0.0, 0.0, 100.0, 300.0)),
    (Term::Medium, Triangle(200.0, 800.0, 1500.0)),
    (Term::High, Trapezoid(1200.0, 2500.0, 5000.0, 5000.0)),
];

impl Variable {
    pub const ALL: [Variable; 7] = [
        Variable::Connectivity,
        Variable::Throughput,
        Variable::PacketLoss,
        Variable::DnsErrors,
        Variable::WifiSignal,
        Variable::PageLoad,
        Variable::ServerLatency,
    ];

    /// Valid measurement range (inclusive)
    pub fn domain(&self) -> (f64, f64) {
        match self {
            Variable::Connectivity => (0.0, 100.0),
            Variable::Throughput => (0.0, 100.0),
            Variable::PacketLoss => (0.0, 100.0),
            Variable::DnsErrors => (0.0, 10.0),
            Variable::WifiSignal => (0.0, 100.0),
            Variable::PageLoad => (0.0, 5000.0),
            Variable::ServerLatency => (0.0, 5000.0),
        }
    }

    pub fn terms(&self) -> &'static [(Term, MembershipFn)] {
        match self {
            Variable::Connectivity => CONNECTIVITY_TERMS,
            Variable::Throughput => THROUGHPUT_TERMS,
            Variable::PacketLoss => PACKET_LOSS_TERMS,
            Variable::DnsErrors => DNS_ERROR_TERMS,
            Variable::WifiSignal => WIFI_SIGNAL_TERMS,
            Variable::PageLoad => PAGE_LOAD_TERMS,
            Variable::ServerLatency => SERVER_LATENCY_TERMS,
        }
    }

    /// Clamp into the domain; NaN reads as the lower bound
    pub fn clamp(&self, x: f64) -> f64 {
        let (lo, hi) = self.domain();
        if x.is_nan() {
            lo
        } else {
            x.clamp(lo, hi)
        }
    }
}

// ============================================================================
// INPUT
// ============================================================================

/// Crisp measurements fed to the fuzzy engine
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FuzzyInput {
    /// Connectivity (0-100 %)
    #[serde(rename = "conectividad", alias = "connectivity")]
    pub connectivity: f64,
    /// Throughput (0-100 Mbps)
    #[serde(rename = "velocidad", alias = "throughput")]
    pub throughput: f64,
    /// Packet loss (0-100 %)
    #[serde(rename = "perdida_paquetes", alias = "packetLoss")]
    pub packet_loss: f64,
    /// DNS errors per hour (0-10)
    #[serde(rename = "errores_dns", alias = "dnsErrors")]
    pub dns_errors: f64,
    /// Wi-Fi signal strength (0-100 %)
    #[serde(rename = "senal_wifi", alias = "wifiSignal")]
    pub wifi_signal: f64,
    /// Page-load time (0-5000 ms)
    #[serde(rename = "tiempo_carga", alias = "pageLoad")]
    pub page_load: f64,
    /// Internal-server latency (0-5000 ms)
    #[serde(rename = "latencia_servidor", alias = "serverLatency")]
    pub server_latency: f64,
}

impl Default for FuzzyInput {
    /// A healthy network
    fn default() -> Self {
        Self {
            connectivity: 95.0,
            throughput: 80.0,
            packet_loss: 0.0,
            dns_errors: 0.0,
            wifi_signal: 85.0,
            page_load: 600.0,
            server_latency: 80.0,
        }
    }
}

impl FuzzyInput {
    pub fn value(&self, variable: Variable) -> f64 {
        match variable {
            Variable::Connectivity => self.connectivity,
            Variable::Throughput => self.throughput,
            Variable::PacketLoss => self.packet_loss,
            Variable::DnsErrors => self.dns_errors,
            Variable::WifiSignal => self.wifi_signal,
            Variable::PageLoad => self.page_load,
            Variable::ServerLatency => self.server_latency,
        }
    }

    /// Synthesize measurements from discrete symptoms.
    /// Starts from a healthy network and degrades one dimension per symptom.
    pub fn from_symptoms(symptoms: &[Symptom]) -> Self {
        let mut input = Self::default();
        for symptom in symptoms {
            match symptom {
                Symptom::NoInternet => {
                    input.connectivity = 5.0;
                    input.throughput = 1.0;
                }
                Symptom::PacketLoss => input.packet_loss = 35.0,
                Symptom::DnsError => input.dns_errors = 8.0,
                Symptom::SlowPageLoad => {
                    input.page_load = 4000.0;
                    input.throughput = input.throughput.min(12.0);
                }
                Symptom::WeakWifiSignal => input.wifi_signal = 15.0,
                Symptom::IntermittentConnection => {
                    input.connectivity = input.connectivity.min(50.0);
                }
                Symptom::SlowInternalServer => input.server_latency = 3000.0,
            }
        }
        input
    }
}

// ============================================================================
// MEMBERSHIP PROFILE
// ============================================================================

/// Degree of every term of every variable for one input
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MembershipProfile(BTreeMap<Variable, BTreeMap<Term, f64>>);

impl MembershipProfile {
    /// Degree of `term` for `variable`; unknown terms read as 0
    pub fn degree(&self, variable: Variable, term: Term) -> f64 {
        self.0
            .get(&variable)
            .and_then(|terms| terms.get(&term))
            .copied()
            .unwrap_or(0.0)
    }
}

/// Evaluate every term of every variable
pub fn fuzzify(input: &FuzzyInput) -> MembershipProfile {
    let profile = Variable::ALL
        .iter()
        .map(|variable| {
            let x = variable.clamp(input.value(*variable));
            let degrees = variable
                .terms()
                .iter()
                .map(|(term, mf)| (*term, mf.degree(x)))
                .collect();
            (*variable, degrees)
        })
        .collect();
    MembershipProfile(profile)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_trapmf_shape() {
        assert_eq!(trapmf(-1.0, 0.0, 10.0, 20.0, 30.0), 0.0);
        assert!((trapmf(5.0, 0.0, 10.0, 20.0, 30.0) - 0.5).abs() < EPS);
        assert_eq!(trapmf(15.0, 0.0, 10.0, 20.0, 30.0), 1.0);
        assert!((trapmf(25.0, 0.0, 10.0, 20.0, 30.0) - 0.5).abs() < EPS);
        assert_eq!(trapmf(31.0, 0.0, 10.0, 20.0, 30.0), 0.0);
    }

    #[test]
    fn test_trapmf_shoulders() {
        // Left shoulder (a == b) is fully on at the edge
        assert_eq!(trapmf(0.0, 0.0, 0.0, 10.0, 30.0), 1.0);
        // Right shoulder (c == d)
        assert_eq!(trapmf(100.0, 70.0, 90.0, 100.0, 100.0), 1.0);
    }

    #[test]
    fn test_trimf_shape() {
        assert_eq!(trimf(20.0, 20.0, 50.0, 80.0), 0.0);
        assert_eq!(trimf(50.0, 20.0, 50.0, 80.0), 1.0);
        assert!((trimf(35.0, 20.0, 50.0, 80.0) - 0.5).abs() < EPS);
        assert!((trimf(65.0, 20.0, 50.0, 80.0) - 0.5).abs() < EPS);
        assert_eq!(trimf(90.0, 20.0, 50.0, 80.0), 0.0);
    }

    #[test]
    fn test_degrees_stay_in_unit_interval() {
        for variable in Variable::ALL {
            let (lo, hi) = variable.domain();
            for step in 0..=200 {
                let x = lo + (hi - lo) * step as f64 / 200.0;
                for (term, mf) in variable.terms() {
                    let d = mf.degree(x);
                    assert!((0.0..=1.0).contains(&d), "{:?}/{:?} at {} = {}", variable, term, x, d);
                }
            }
        }
    }

    #[test]
    fn test_fuzzify_total_outage() {
        let input = FuzzyInput {
            connectivity: 0.0,
            throughput: 0.0,
            packet_loss: 0.0,
            dns_errors: 0.0,
            wifi_signal: 0.0,
            page_load: 0.0,
            server_latency: 0.0,
        };
        let profile = fuzzify(&input);
        assert_eq!(profile.degree(Variable::Connectivity, Term::None), 1.0);
        assert_eq!(profile.degree(Variable::Connectivity, Term::Stable), 0.0);
        assert_eq!(profile.degree(Variable::Throughput, Term::VeryLow), 1.0);
        assert_eq!(profile.degree(Variable::WifiSignal, Term::Weak), 1.0);
        // Term not defined for this variable
        assert_eq!(profile.degree(Variable::WifiSignal, Term::Critical), 0.0);
    }

    #[test]
    fn test_out_of_range_values_are_clamped() {
        let input = FuzzyInput {
            dns_errors: 42.0,
            connectivity: f64::NAN,
            ..Default::default()
        };
        let profile = fuzzify(&input);
        assert_eq!(profile.degree(Variable::DnsErrors, Term::Critical), 1.0);
        assert_eq!(profile.degree(Variable::Connectivity, Term::None), 1.0);
    }

    #[test]
    fn test_from_symptoms_degrades_dimensions() {
        let input = FuzzyInput::from_symptoms(&[Symptom::NoInternet, Symptom::DnsError]);
        assert!(input.connectivity < 10.0);
        assert!(input.dns_errors >= 8.0);
        assert_eq!(input.wifi_signal, FuzzyInput::default().wifi_signal);

        // Intermittent must not override a full outage
        let input =
            FuzzyInput::from_symptoms(&[Symptom::NoInternet, Symptom::IntermittentConnection]);
        assert!(input.connectivity < 10.0);
    }

    #[test]
    fn test_input_wire_names() {
        let input: FuzzyInput = serde_json::from_str(
            r#"{"conectividad": 10, "velocidad": 2, "perdida_paquetes": 0,
                "errores_dns": 7, "senal_wifi": 60, "tiempo_carga": 900,
                "latencia_servidor": 100}"#,
        ).unwrap();
        assert_eq!(input.dns_errors, 7.0);

        let input: FuzzyInput = serde_json::from_str(
            r#"{"connectivity": 10, "throughput": 2, "packetLoss": 0,
                "dnsErrors": 7, "wifiSignal": 60, "pageLoad": 900,
                "serverLatency": 100}"#,
        ).unwrap();
        assert_eq!(input.server_latency, 100.0);
    }
}
