//! HTTP adapter for garment endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{
    AnalysisResponse, DialogueResponse, ErrorResponse, GarmentLine, GarmentPairRequest,
    GenerateDialogueRequest, HealthResponse, ANALYZED_BY, POWERED_BY, SERVICE_NAME,
};
pub use handlers::{ApiError, GarmentHandlers};
pub use routes::garment_routes;
