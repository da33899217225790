use actix_web::{get, web, Responder};
use serde::Deserialize;
use tracing::error;
use utoipa::IntoParams;

use crate::api::schemas::ErrorResponse;
use crate::modules::project::application::ports::incoming::use_cases::SearchProjectsError;
use crate::modules::project::domain::Project;
use crate::shared::api::ApiResponse;
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// Query DTO
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Deserialize, IntoParams)]
pub struct SearchProjectsQuery {
    /// Free-text query; blank or missing returns an empty array
    #[serde(default)]
    pub q: String,
}

//
// ──────────────────────────────────────────────────────────
// Handler
// ──────────────────────────────────────────────────────────
//

/// Search projects
///
/// Case-insensitive substring match over title, credit labels and
/// technologies. Title matches come first, then shorter titles.
#[utoipa::path(
    get,
    path = "/api/projects/search",
    tag = "projects",
    params(SearchProjectsQuery),
    responses(
        (status = 200, description = "Ranked matches", body = Vec<Project>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[get("/api/projects/search")]
pub async fn search_projects_handler(
    query: web::Query<SearchProjectsQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let SearchProjectsQuery { q } = query.into_inner();

    match data.project.search.execute(&q).await {
        Ok(projects) => ApiResponse::success(projects),

        Err(SearchProjectsError::QueryFailed(msg)) => {
            error!("Search failed for q={:?}: {}", q, msg);
            ApiResponse::internal_error()
        }
    }
}
