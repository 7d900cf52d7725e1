//! HTTP handlers for garment endpoints.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::application::handlers::garment::{
    AnalyzeCompatibilityHandler, AnalyzeCompatibilityQuery, DialogueError,
    GenerateDialogueCommand, GenerateDialogueHandler, ScorePairHandler, ScorePairQuery,
    ScorePairResult,
};
use crate::domain::foundation::ValidationError;
use crate::domain::garment::Garment;

use super::dto::{
    AnalysisResponse, DialogueResponse, ErrorResponse, GarmentPairRequest,
    GenerateDialogueRequest, HealthResponse, ANALYZED_BY, SERVICE_NAME,
};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct GarmentHandlers {
    dialogue_handler: Arc<GenerateDialogueHandler>,
    analyze_handler: Arc<AnalyzeCompatibilityHandler>,
    score_handler: ScorePairHandler,
    llm_provider: String,
}

impl GarmentHandlers {
    pub fn new(
        dialogue_handler: Arc<GenerateDialogueHandler>,
        analyze_handler: Arc<AnalyzeCompatibilityHandler>,
        llm_provider: impl Into<String>,
    ) -> Self {
        Self {
            dialogue_handler,
            analyze_handler,
            score_handler: ScorePairHandler::new(),
            llm_provider: llm_provider.into(),
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// GET /health - Liveness and configured provider
pub async fn health(State(handlers): State<GarmentHandlers>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        service: SERVICE_NAME,
        llm_provider: handlers.llm_provider,
    })
}

/// POST /dialogue/generate - Proposal and acceptance lines for a pair
pub async fn generate_dialogue(
    State(handlers): State<GarmentHandlers>,
    body: Result<Json<GenerateDialogueRequest>, JsonRejection>,
) -> Result<Json<DialogueResponse>, ApiError> {
    let Json(req) = body?;
    let (garment_a, garment_b) = garment_pair(req.garment_a.as_ref(), req.garment_b.as_ref())?;

    let cmd = GenerateDialogueCommand {
        garment_a,
        garment_b,
        compatibility_score: req.compatibility_score(),
        trace_id: new_trace_id(),
    };

    let result = handlers.dialogue_handler.handle(cmd).await?;
    Ok(Json(result.into()))
}

/// POST /compatibility/analyze - Reasoned verdict on a pair
pub async fn analyze_compatibility(
    State(handlers): State<GarmentHandlers>,
    body: Result<Json<GarmentPairRequest>, JsonRejection>,
) -> Result<Json<AnalysisResponse>, ApiError> {
    let Json(req) = body?;
    let (garment_a, garment_b) = garment_pair(req.garment_a.as_ref(), req.garment_b.as_ref())?;

    let query = AnalyzeCompatibilityQuery {
        garment_a,
        garment_b,
        trace_id: new_trace_id(),
    };

    let result = handlers.analyze_handler.handle(query).await?;
    Ok(Json(AnalysisResponse {
        reasoning: result.reasoning,
        analyzed_by: ANALYZED_BY,
    }))
}

/// POST /compatibility/score - Deterministic scores, no provider call
pub async fn score_pair(
    State(handlers): State<GarmentHandlers>,
    body: Result<Json<GarmentPairRequest>, JsonRejection>,
) -> Result<Json<ScorePairResult>, ApiError> {
    let Json(req) = body?;
    let (garment_a, garment_b) = garment_pair(req.garment_a.as_ref(), req.garment_b.as_ref())?;

    Ok(Json(handlers.score_handler.handle(ScorePairQuery {
        garment_a,
        garment_b,
    })))
}

fn garment_pair(
    a: Option<&serde_json::Value>,
    b: Option<&serde_json::Value>,
) -> Result<(Garment, Garment), ValidationError> {
    Ok((
        Garment::from_request_value("garment_a", a)?,
        Garment::from_request_value("garment_b", b)?,
    ))
}

fn new_trace_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

// ════════════════════════════════════════════════════════════════════════════
// Error handling
// ════════════════════════════════════════════════════════════════════════════

/// Error returned by garment endpoints, rendered as `{error}`.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: message.into(),
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::bad_request(rejection.body_text())
    }
}

impl From<ValidationError> for ApiError {
    fn from(error: ValidationError) -> Self {
        ApiError::bad_request(error.to_string())
    }
}

impl From<DialogueError> for ApiError {
    fn from(error: DialogueError) -> Self {
        match error {
            DialogueError::Validation(e) => e.into(),
            DialogueError::Collaborator(e) => {
                tracing::error!(error = %e, "Language model collaborator failed");
                ApiError::internal(e.to_string())
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(ErrorResponse::new(self.message))).into_response()
    }
}
