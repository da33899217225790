use utoipa::OpenApi;

use crate::api::schemas::ErrorResponse;
use crate::health::{HealthResponse, ReadinessResponse};
use crate::profile::application::use_cases::download_resume::ResumeLink;
use crate::profile::domain::{Profile, Skills, SocialLinks};
use crate::project::application::ports::incoming::use_cases::{CategoryRail, RailState};
use crate::project::domain::{Category, Project};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Portfolio API",
        version = "1.0.0",
        description = "Read-only API serving the portfolio profile and project catalogue"
    ),
    paths(
        // Health
        crate::health::health,
        crate::health::api_health,
        crate::health::readiness,

        // Projects
        crate::project::adapter::incoming::web::routes::get_projects_handler,
        crate::project::adapter::incoming::web::routes::get_featured_projects_handler,
        crate::project::adapter::incoming::web::routes::get_category_rails_handler,
        crate::project::adapter::incoming::web::routes::search_projects_handler,
        crate::project::adapter::incoming::web::routes::get_projects_by_category_handler,
        crate::project::adapter::incoming::web::routes::get_single_project_handler,

        // Profile
        crate::profile::adapter::incoming::web::routes::get_profile_handler,
        crate::profile::adapter::incoming::web::routes::download_resume_handler,
    ),
    components(
        schemas(
            ErrorResponse,
            HealthResponse,
            ReadinessResponse,
            Project,
            Category,
            CategoryRail,
            RailState,
            Profile,
            Skills,
            SocialLinks,
            ResumeLink
        )
    ),
    tags(
        (name = "projects", description = "Project catalogue, rails and search"),
        (name = "profile", description = "Portfolio owner profile and resume"),
        (name = "health", description = "Liveness and readiness probes"),
    )
)]
pub struct ApiDoc;
