//! Knowledge Module
//!
//! Single source of truth for symptoms, causes, their associations
//! and the remediation catalog. Pure data, no inference.
//!
//! ## Structure
//! - `types`: Symptom, Cause, Finding enums
//! - `tables`: association tables, action catalog, consistency check

pub mod tables;
pub mod types;

pub use tables::{validate, KnowledgeBase, KNOWLEDGE};
pub use types::{Cause, Finding, Symptom};
