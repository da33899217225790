// src/api/schemas.rs
use serde::Serialize;
use utoipa::ToSchema;

/// Body of every non-2xx response
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Error code for programmatic handling
    #[schema(example = "PROJECT_NOT_FOUND")]
    pub code: String,

    /// Human-readable error message
    #[schema(example = "Project not found")]
    pub message: String,
}
