//! Orchestrator Settings
//!
//! Post-processing knobs applied after an engine has ranked causes.
//! No logic here - only config.

use serde::{Deserialize, Serialize};

use crate::constants::{
    DNS_OVERRIDE_PROBABILITY, DNS_OVERRIDE_THRESHOLD, RANK_PROBABILITY_FLOOR,
    RANK_PROBABILITY_START, RANK_PROBABILITY_STEP,
};

/// Settings for result adaptation (configurable)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiagnosisConfig {
    /// Display probability of the top cause (frequency / rule-based)
    pub rank_start: u8,
    /// Decrease per rank
    pub rank_step: u8,
    /// Lowest display probability
    pub rank_floor: u8,
    /// Raw DNS errors/hour that trigger the fuzzy DNS override
    pub dns_override_threshold: f64,
    /// Probability of an inserted DNS entry
    pub dns_override_probability: u8,
}

impl Default for DiagnosisConfig {
    fn default() -> Self {
        Self {
            rank_start: RANK_PROBABILITY_START,
            rank_step: RANK_PROBABILITY_STEP,
            rank_floor: RANK_PROBABILITY_FLOOR,
            dns_override_threshold: DNS_OVERRIDE_THRESHOLD,
            dns_override_probability: DNS_OVERRIDE_PROBABILITY,
        }
    }
}

impl DiagnosisConfig {
    /// Display probability for the cause at `rank` (0-based)
    pub fn rank_probability(&self, rank: usize) -> u8 {
        let drop = (self.rank_step as usize).saturating_mul(rank);
        let value = (self.rank_start as usize).saturating_sub(drop);
        value.max(self.rank_floor as usize).min(100) as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank_probability_decays_to_floor() {
        let config = DiagnosisConfig::default();
        assert_eq!(config.rank_probability(0), 90);
        assert_eq!(config.rank_probability(1), 75);
        assert_eq!(config.rank_probability(5), 15);
        assert_eq!(config.rank_probability(6), 10);
        assert_eq!(config.rank_probability(1000), 10);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: DiagnosisConfig = serde_json::from_str(r#"{"rank_step": 5}"#).unwrap();
        assert_eq!(config.rank_step, 5);
        assert_eq!(config.rank_start, 90);
        assert_eq!(config.dns_override_threshold, 5.0);
    }
}
