use actix_web::{get, web, Responder};
use tracing::error;

use crate::api::schemas::ErrorResponse;
use crate::modules::project::application::ports::incoming::use_cases::GetSingleProjectError;
use crate::modules::project::domain::{Project, ProjectId};
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Get a project by id
#[utoipa::path(
    get,
    path = "/api/projects/{id}",
    tag = "projects",
    params(
        ("id" = String, Path, description = "Project id")
    ),
    responses(
        (status = 200, description = "The project", body = Project),
        (
            status = 404,
            description = "No project with that id",
            body = ErrorResponse,
            example = json!({
                "code": "PROJECT_NOT_FOUND",
                "message": "Project not found"
            })
        ),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[get("/api/projects/{id}")]
pub async fn get_single_project_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = ProjectId::from(path.into_inner());

    match data.project.get_single.execute(&id).await {
        Ok(project) => ApiResponse::success(project),

        Err(GetSingleProjectError::NotFound) => {
            ApiResponse::not_found("PROJECT_NOT_FOUND", "Project not found")
        }

        Err(GetSingleProjectError::RepositoryError(msg)) => {
            error!("Repository error fetching project id={}: {}", id, msg);
            ApiResponse::internal_error()
        }
    }
}
