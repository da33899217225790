use actix_web::{get, web, Responder};
use tracing::error;

use crate::api::schemas::ErrorResponse;
use crate::modules::project::application::ports::incoming::use_cases::GetProjectsError;
use crate::modules::project::domain::Project;
use crate::shared::api::ApiResponse;
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// Handler
// ──────────────────────────────────────────────────────────
//

/// List projects
///
/// Returns the whole catalogue in insertion order.
#[utoipa::path(
    get,
    path = "/api/projects",
    tag = "projects",
    responses(
        (status = 200, description = "All projects", body = Vec<Project>),
        (
            status = 500,
            description = "Internal server error",
            body = ErrorResponse,
            example = json!({
                "code": "INTERNAL_ERROR",
                "message": "An unexpected error occurred"
            })
        )
    )
)]
#[get("/api/projects")]
pub async fn get_projects_handler(data: web::Data<AppState>) -> impl Responder {
    match data.project.get_list.execute().await {
        Ok(projects) => ApiResponse::success(projects),

        Err(GetProjectsError::QueryFailed(msg)) => {
            error!("Failed to list projects: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
