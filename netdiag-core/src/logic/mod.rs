//! Logic Module - Knowledge & Inference Engines
//!
//! - `knowledge/` - symptoms, causes, associations, actions
//! - `frequency/` - symptom-count ranking
//! - `fuzzy/` - fuzzy inference over measurements
//! - `rule_based/` - symbolic rule matching
//! - `diagnosis/` - orchestrator and uniform result

pub mod diagnosis;
pub mod frequency;
pub mod fuzzy;
pub mod knowledge;
pub mod rule_based;
