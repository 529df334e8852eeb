//! Diagnosis handler

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    Json,
};

use netdiag_core::diagnose_with_config;

use crate::models::{DiagnoseBody, DiagnoseParams, DiagnoseResponse};
use crate::{AppResult, AppState};

/// POST /api/v1/diagnose
pub async fn diagnose(
    State(state): State<AppState>,
    params: Result<Query<DiagnoseParams>, QueryRejection>,
    body: Result<Json<DiagnoseBody>, JsonRejection>,
) -> AppResult<Json<DiagnoseResponse>> {
    let Query(params) = params?;
    let Json(body) = body?;
    let request = body.validate()?;

    tracing::debug!(
        "Diagnose: system={} symptoms={}",
        request.system,
        request.symptoms.len()
    );

    let diagnosis = diagnose_with_config(&request, &state.diagnosis);

    if let Some(top) = diagnosis.result.top() {
        tracing::info!("Diagnosis ({}): {}", request.system, top.cause);
    }

    Ok(Json(DiagnoseResponse {
        result: diagnosis.result,
        explanation: params.explain.then_some(diagnosis.explanation),
    }))
}
