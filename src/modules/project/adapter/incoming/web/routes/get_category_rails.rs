use actix_web::{get, web, Responder};

use crate::modules::project::application::ports::incoming::use_cases::CategoryRail;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Category rails
///
/// One entry per category in display order. A rail that fails to load is
/// reported in place with `status = "failed"`; the others are unaffected,
/// so this endpoint always answers 200.
#[utoipa::path(
    get,
    path = "/api/projects/rails",
    tag = "projects",
    responses(
        (
            status = 200,
            description = "Rails in declaration order",
            body = Vec<CategoryRail>,
            example = json!([
                { "category": "featured", "status": "loaded", "projects": [] },
                { "category": "web", "status": "failed", "message": "Failed to load web projects" }
            ])
        )
    )
)]
#[get("/api/projects/rails")]
pub async fn get_category_rails_handler(data: web::Data<AppState>) -> impl Responder {
    ApiResponse::success(data.project.get_rails.execute().await)
}
