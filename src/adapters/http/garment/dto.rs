//! HTTP DTOs for garment endpoints.
//!
//! Garments arrive as raw JSON so that a missing or empty object can be told
//! apart from a malformed one; the handlers validate them into domain records.

use serde::{Deserialize, Serialize};

use crate::application::handlers::garment::GenerateDialogueResult;
use crate::domain::dialogue::DEFAULT_COMPATIBILITY_SCORE;

/// Label reported in `powered_by` on generated dialogues.
pub const POWERED_BY: &str = "Red String Agent Runtime";

/// Label reported in `analyzed_by` on compatibility analyses.
pub const ANALYZED_BY: &str = "Red String GarmentDialogueAgent";

/// Service name reported by the health endpoint.
pub const SERVICE_NAME: &str = "Red String Garment Agent Service";

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Body of `POST /dialogue/generate`.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateDialogueRequest {
    #[serde(default)]
    pub garment_a: Option<serde_json::Value>,
    #[serde(default)]
    pub garment_b: Option<serde_json::Value>,
    #[serde(default)]
    pub compatibility_score: Option<f64>,
}

impl GenerateDialogueRequest {
    pub fn compatibility_score(&self) -> f64 {
        self.compatibility_score.unwrap_or(DEFAULT_COMPATIBILITY_SCORE)
    }
}

/// Body of `POST /compatibility/analyze` and `POST /compatibility/score`.
#[derive(Debug, Clone, Deserialize)]
pub struct GarmentPairRequest {
    #[serde(default)]
    pub garment_a: Option<serde_json::Value>,
    #[serde(default)]
    pub garment_b: Option<serde_json::Value>,
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// One garment's line of dialogue.
#[derive(Debug, Clone, Serialize)]
pub struct GarmentLine {
    pub name: String,
    pub text: String,
}

/// Response for a generated dialogue.
#[derive(Debug, Clone, Serialize)]
pub struct DialogueResponse {
    #[serde(rename = "garmentA")]
    pub garment_a: GarmentLine,
    #[serde(rename = "garmentB")]
    pub garment_b: GarmentLine,
    pub compatibility: i64,
    pub powered_by: &'static str,
}

impl From<GenerateDialogueResult> for DialogueResponse {
    fn from(result: GenerateDialogueResult) -> Self {
        let compatibility = result.compatibility_percent();
        Self {
            garment_a: GarmentLine {
                name: result.garment_a_name,
                text: result.proposal,
            },
            garment_b: GarmentLine {
                name: result.garment_b_name,
                text: result.acceptance,
            },
            compatibility,
            powered_by: POWERED_BY,
        }
    }
}

/// Response for a compatibility analysis.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisResponse {
    pub reasoning: String,
    pub analyzed_by: &'static str,
}

/// Response for the health check.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub llm_provider: String,
}

/// Error body shared by every endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dialogue_request_defaults_score() {
        let req: GenerateDialogueRequest =
            serde_json::from_str(r#"{"garment_a": {"name": "A"}}"#).unwrap();
        assert_eq!(req.compatibility_score(), 0.7);
        assert!(req.garment_b.is_none());
    }

    #[test]
    fn dialogue_response_uses_camel_case_garment_keys() {
        let response = DialogueResponse::from(GenerateDialogueResult {
            garment_a_name: "Jacket".into(),
            proposal: "Swap?".into(),
            garment_b_name: "Hoodie".into(),
            acceptance: "Yes!".into(),
            compatibility_score: 0.856,
        });

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["garmentA"]["name"], "Jacket");
        assert_eq!(json["garmentA"]["text"], "Swap?");
        assert_eq!(json["garmentB"]["text"], "Yes!");
        assert_eq!(json["compatibility"], 85);
        assert_eq!(json["powered_by"], POWERED_BY);
    }
}
