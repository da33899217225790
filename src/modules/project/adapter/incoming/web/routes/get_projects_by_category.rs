use actix_web::{get, web, Responder};
use tracing::error;

use crate::api::schemas::ErrorResponse;
use crate::modules::project::application::ports::incoming::use_cases::GetProjectsByCategoryError;
use crate::modules::project::domain::Project;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// List projects in a category
///
/// Unknown categories are not an error; they return an empty array.
#[utoipa::path(
    get,
    path = "/api/projects/category/{category}",
    tag = "projects",
    params(
        ("category" = String, Path, description = "Category name", example = "web")
    ),
    responses(
        (status = 200, description = "Projects tagged with the category", body = Vec<Project>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[get("/api/projects/category/{category}")]
pub async fn get_projects_by_category_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let category = path.into_inner();

    match data.project.get_by_category.execute(&category).await {
        Ok(projects) => ApiResponse::success(projects),

        Err(GetProjectsByCategoryError::QueryFailed(msg)) => {
            error!("Failed to list projects for category={}: {}", category, msg);
            ApiResponse::internal_error()
        }
    }
}
