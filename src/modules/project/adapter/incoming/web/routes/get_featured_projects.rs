use actix_web::{get, web, Responder};
use tracing::error;

use crate::api::schemas::ErrorResponse;
use crate::modules::project::application::ports::incoming::use_cases::GetFeaturedProjectsError;
use crate::modules::project::domain::Project;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// List featured projects
#[utoipa::path(
    get,
    path = "/api/projects/featured",
    tag = "projects",
    responses(
        (status = 200, description = "Projects flagged as featured", body = Vec<Project>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[get("/api/projects/featured")]
pub async fn get_featured_projects_handler(data: web::Data<AppState>) -> impl Responder {
    match data.project.get_featured.execute().await {
        Ok(projects) => ApiResponse::success(projects),

        Err(GetFeaturedProjectsError::QueryFailed(msg)) => {
            error!("Failed to list featured projects: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
