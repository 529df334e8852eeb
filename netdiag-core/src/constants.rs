//! Central Configuration Constants
//!
//! Single source of truth for diagnosis defaults.

/// App version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// App name
pub const APP_NAME: &str = "NetDiag";

// ============================================
// Display probabilities (frequency / rule-based)
// ============================================

/// Synthetic probability given to the first-ranked cause
pub const RANK_PROBABILITY_START: u8 = 90;

/// Drop per rank
pub const RANK_PROBABILITY_STEP: u8 = 15;

/// Never go below this
pub const RANK_PROBABILITY_FLOOR: u8 = 10;

// ============================================
// Fuzzy DNS override
// ============================================

/// Raw DNS errors/hour above which bad DNS config is forced first
pub const DNS_OVERRIDE_THRESHOLD: f64 = 5.0;

/// Probability of the entry inserted when the override finds no DNS cause
pub const DNS_OVERRIDE_PROBABILITY: u8 = 70;
