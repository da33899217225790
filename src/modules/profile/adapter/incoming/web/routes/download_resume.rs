use actix_web::{get, web, Responder};
use tracing::error;

use crate::api::schemas::ErrorResponse;
use crate::profile::application::use_cases::download_resume::{DownloadResumeError, ResumeLink};
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Get the resume download link
///
/// Returns where the resume lives; the client performs the navigation.
#[utoipa::path(
    get,
    path = "/api/download-resume",
    tag = "profile",
    responses(
        (status = 200, description = "Resume location", body = ResumeLink),
        (
            status = 404,
            description = "No profile, or the profile has no resume",
            body = ErrorResponse,
            example = json!({
                "code": "RESUME_NOT_FOUND",
                "message": "Resume not available"
            })
        ),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[get("/api/download-resume")]
pub async fn download_resume_handler(data: web::Data<AppState>) -> impl Responder {
    match data.profile.download_resume.execute().await {
        Ok(link) => ApiResponse::success(link),

        Err(DownloadResumeError::ProfileNotFound) => {
            ApiResponse::not_found("PROFILE_NOT_FOUND", "Profile not found")
        }

        Err(DownloadResumeError::ResumeNotAvailable) => {
            ApiResponse::not_found("RESUME_NOT_FOUND", "Resume not available")
        }

        Err(DownloadResumeError::RepositoryError(msg)) => {
            error!("Repository error resolving resume link: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
