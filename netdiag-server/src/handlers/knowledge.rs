//! Knowledge base handlers

use axum::Json;
use serde::Serialize;

use netdiag_core::logic::knowledge::{Cause, Symptom, KNOWLEDGE};
use netdiag_core::logic::rule_based::{builtin_rules, Rule};

#[derive(Debug, Serialize)]
pub struct SymptomView {
    pub sintoma: Symptom,
    pub causas: Vec<Cause>,
}

#[derive(Debug, Serialize)]
pub struct CauseView {
    pub causa: Cause,
    pub acciones: Vec<&'static str>,
}

#[derive(Debug, Serialize)]
pub struct KnowledgeResponse {
    pub sintomas: Vec<SymptomView>,
    pub causas: Vec<CauseView>,
}

/// Symptom→cause associations and the action catalog
pub async fn list() -> Json<KnowledgeResponse> {
    let sintomas = Symptom::ALL
        .iter()
        .map(|&symptom| SymptomView {
            sintoma: symptom,
            causas: KNOWLEDGE.causes_for(symptom).to_vec(),
        })
        .collect();

    let causas = Cause::ALL
        .iter()
        .map(|&cause| CauseView {
            causa: cause,
            acciones: KNOWLEDGE.actions_for(cause).to_vec(),
        })
        .collect();

    Json(KnowledgeResponse { sintomas, causas })
}

/// Built-in rule table of the rule-based engine
pub async fn rules() -> Json<Vec<Rule>> {
    Json(builtin_rules().to_vec())
}
