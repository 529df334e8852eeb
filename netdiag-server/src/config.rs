//! Configuration module

use std::env;

use netdiag_core::DiagnosisConfig;

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Server port
    pub port: u16,

    /// Environment (development, production)
    pub environment: String,

    /// Artificial delay before diagnosis responses (ms, 0 = off)
    pub response_delay_ms: u64,

    /// Raw DNS errors/hour that force the fuzzy DNS override
    pub dns_override_threshold: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            environment: "development".to_string(),
            response_delay_ms: 0,
            dns_override_threshold: DiagnosisConfig::default().dns_override_threshold,
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from any key lookup; unset or unparsable values
    /// fall back to the defaults
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        Self {
            port: lookup("PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.port),

            environment: lookup("ENVIRONMENT").unwrap_or(defaults.environment),

            response_delay_ms: lookup("RESPONSE_DELAY_MS")
                .and_then(|d| d.parse().ok())
                .unwrap_or(defaults.response_delay_ms),

            dns_override_threshold: lookup("DNS_OVERRIDE_THRESHOLD")
                .and_then(|t| t.parse().ok())
                .unwrap_or(defaults.dns_override_threshold),
        }
    }

    /// Check if running in production
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// Orchestrator settings derived from this config
    pub fn diagnosis_config(&self) -> DiagnosisConfig {
        DiagnosisConfig {
            dns_override_threshold: self.dns_override_threshold,
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_from_lookup_reads_every_variable() {
        let config = lookup(&[
            ("PORT", "9090"),
            ("ENVIRONMENT", "production"),
            ("RESPONSE_DELAY_MS", "1500"),
            ("DNS_OVERRIDE_THRESHOLD", "3.5"),
        ]);
        assert_eq!(config.port, 9090);
        assert!(config.is_production());
        assert_eq!(config.response_delay_ms, 1500);
        assert_eq!(config.dns_override_threshold, 3.5);
        assert_eq!(config.diagnosis_config().dns_override_threshold, 3.5);
    }

    #[test]
    fn test_from_lookup_falls_back_on_bad_values() {
        let config = lookup(&[
            ("PORT", "not-a-port"),
            ("RESPONSE_DELAY_MS", "-5"),
            ("DNS_OVERRIDE_THRESHOLD", "high"),
        ]);
        let defaults = Config::default();
        assert_eq!(config.port, defaults.port);
        assert_eq!(config.response_delay_ms, 0);
        assert_eq!(config.dns_override_threshold, 5.0);
        assert_eq!(config.environment, "development");
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.port, 8080);
        assert_eq!(config.response_delay_ms, 0);
        assert!(!config.is_production());
        assert_eq!(config.diagnosis_config(), DiagnosisConfig::default());
    }

    #[test]
    fn test_threshold_flows_into_diagnosis_config() {
        let config = Config {
            dns_override_threshold: 2.0,
            ..Default::default()
        };
        assert_eq!(config.diagnosis_config().dns_override_threshold, 2.0);
    }
}
