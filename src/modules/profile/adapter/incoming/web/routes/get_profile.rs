use actix_web::{get, web, Responder};
use tracing::error;

use crate::api::schemas::ErrorResponse;
use crate::profile::application::use_cases::get_profile::GetProfileError;
use crate::profile::domain::Profile;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Get the portfolio owner's profile
#[utoipa::path(
    get,
    path = "/api/profile",
    tag = "profile",
    responses(
        (status = 200, description = "The profile", body = Profile),
        (
            status = 404,
            description = "No profile has been loaded",
            body = ErrorResponse,
            example = json!({
                "code": "PROFILE_NOT_FOUND",
                "message": "Profile not found"
            })
        ),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[get("/api/profile")]
pub async fn get_profile_handler(data: web::Data<AppState>) -> impl Responder {
    match data.profile.get.execute().await {
        Ok(profile) => ApiResponse::success(profile),

        Err(GetProfileError::NotFound) => {
            ApiResponse::not_found("PROFILE_NOT_FOUND", "Profile not found")
        }

        Err(GetProfileError::RepositoryError(msg)) => {
            error!("Repository error fetching profile: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
