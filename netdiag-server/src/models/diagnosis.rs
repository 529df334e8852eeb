//! Diagnosis request/response models

use serde::{Deserialize, Serialize};
use serde_json::Value;

use netdiag_core::{
    DiagnosisRequest, DiagnosisResult, Explanation, FuzzyInput, Symptom, SystemType,
};

use crate::{AppError, AppResult};

/// Raw request body, checked field by field so every problem maps to a 400
#[derive(Debug, Default, Deserialize)]
pub struct DiagnoseBody {
    #[serde(rename = "sintomas", alias = "symptoms", default)]
    pub symptoms: Option<Value>,

    #[serde(rename = "systemType", default)]
    pub system_type: Option<Value>,

    #[serde(rename = "mediciones", alias = "measurements", default)]
    pub measurements: Option<Value>,
}

impl DiagnoseBody {
    /// Turn the raw body into a typed request
    pub fn validate(self) -> AppResult<DiagnosisRequest> {
        let symptoms = match self.symptoms {
            Some(Value::Array(items)) => items
                .iter()
                .map(parse_symptom)
                .collect::<AppResult<Vec<Symptom>>>()?,
            Some(_) => {
                return Err(AppError::ValidationError(
                    "'sintomas' must be an array of symptom labels".to_string(),
                ))
            }
            None => {
                return Err(AppError::ValidationError(
                    "'sintomas' is required".to_string(),
                ))
            }
        };

        let system: SystemType = match self.system_type {
            Some(Value::String(s)) => s.parse()?,
            Some(_) => {
                return Err(AppError::ValidationError(
                    "'systemType' must be a string".to_string(),
                ))
            }
            None => {
                return Err(AppError::ValidationError(
                    "'systemType' is required".to_string(),
                ))
            }
        };

        let measurements = match self.measurements {
            None | Some(Value::Null) => None,
            Some(value) => Some(serde_json::from_value::<FuzzyInput>(value).map_err(|e| {
                AppError::ValidationError(format!("invalid 'mediciones': {}", e))
            })?),
        };

        Ok(DiagnosisRequest {
            symptoms,
            system,
            measurements,
        })
    }
}

fn parse_symptom(value: &Value) -> AppResult<Symptom> {
    match value {
        Value::String(label) => Ok(label.parse()?),
        other => Err(AppError::ValidationError(format!(
            "symptom labels must be strings, got {}",
            other
        ))),
    }
}

/// Query parameters of the diagnose endpoint
#[derive(Debug, Default, Deserialize)]
pub struct DiagnoseParams {
    #[serde(default)]
    pub explain: bool,
}

#[derive(Debug, Serialize)]
pub struct DiagnoseResponse {
    #[serde(flatten)]
    pub result: DiagnosisResult,

    #[serde(rename = "explicacion", skip_serializing_if = "Option::is_none")]
    pub explanation: Option<Explanation>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn body(value: Value) -> DiagnoseBody {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_valid_body() {
        let req = body(json!({
            "sintomas": ["No internet", "Packet loss"],
            "systemType": "rule-based"
        }))
        .validate()
        .unwrap();
        assert_eq!(req.symptoms, vec![Symptom::NoInternet, Symptom::PacketLoss]);
        assert_eq!(req.system, SystemType::RuleBased);
    }

    #[test]
    fn test_missing_symptoms_rejected() {
        let err = body(json!({"systemType": "fuzzy"})).validate().unwrap_err();
        assert!(matches!(err, AppError::ValidationError(msg) if msg.contains("required")));
    }

    #[test]
    fn test_non_array_symptoms_rejected() {
        let err = body(json!({"sintomas": "DNS error", "systemType": "fuzzy"}))
            .validate()
            .unwrap_err();
        assert!(matches!(err, AppError::ValidationError(_)));
    }

    #[test]
    fn test_unknown_system_type_rejected() {
        let err = body(json!({"sintomas": [], "systemType": "neural"}))
            .validate()
            .unwrap_err();
        assert!(matches!(err, AppError::ValidationError(msg) if msg.contains("neural")));
    }

    #[test]
    fn test_unknown_symptom_rejected() {
        let err = body(json!({"sintomas": ["Printer on fire"], "systemType": "bayesian"}))
            .validate()
            .unwrap_err();
        assert!(matches!(err, AppError::ValidationError(msg) if msg.contains("Printer on fire")));
    }

    #[test]
    fn test_measurements_are_parsed() {
        let req = body(json!({
            "symptoms": [],
            "systemType": "fuzzy",
            "mediciones": {
                "conectividad": 0, "velocidad": 0, "perdida_paquetes": 0,
                "errores_dns": 0, "senal_wifi": 0, "tiempo_carga": 0,
                "latencia_servidor": 0
            }
        }))
        .validate()
        .unwrap();
        assert_eq!(req.measurements.unwrap().connectivity, 0.0);

        let err = body(json!({
            "sintomas": [],
            "systemType": "fuzzy",
            "mediciones": {"conectividad": "high"}
        }))
        .validate()
        .unwrap_err();
        assert!(matches!(err, AppError::ValidationError(_)));
    }
}
