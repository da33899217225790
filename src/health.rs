use actix_web::{get, web, HttpResponse, Responder};
use serde::Serialize;
use tracing::warn;
use utoipa::ToSchema;

use crate::profile::application::use_cases::get_profile::GetProfileError;
use crate::AppState;

#[derive(Serialize, ToSchema)]
pub struct HealthResponse {
    #[schema(example = "ok")]
    status: &'static str,
}

#[derive(Serialize, ToSchema)]
pub struct ReadinessResponse {
    #[schema(example = "ok")]
    status: &'static str,
    /// Number of projects in the catalogue
    projects: usize,
    #[schema(example = "ok")]
    profile: &'static str,
}

/// LIVENESS PROBE
/// - No I/O
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses((status = 200, description = "Process is up", body = HealthResponse))
)]
#[get("/health")]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse { status: "ok" })
}

/// Same as `/health`, reachable under the API prefix for keep-alive pings.
#[utoipa::path(
    get,
    path = "/api/health",
    tag = "health",
    responses((status = 200, description = "Process is up", body = HealthResponse))
)]
#[get("/api/health")]
pub async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse { status: "ok" })
}

/// READINESS PROBE
/// - Ready once the seed has produced at least one project and a profile
#[utoipa::path(
    get,
    path = "/ready",
    tag = "health",
    responses(
        (status = 200, description = "Seed data is loaded", body = ReadinessResponse),
        (status = 503, description = "Stores are empty or unreadable", body = ReadinessResponse)
    )
)]
#[get("/ready")]
pub async fn readiness(data: web::Data<AppState>) -> impl Responder {
    let projects = match data.project.get_list.execute().await {
        Ok(projects) => Some(projects.len()),
        Err(e) => {
            warn!("Readiness: project store unreadable: {}", e);
            None
        }
    };

    let profile_status = match data.profile.get.execute().await {
        Ok(_) => "ok",
        Err(GetProfileError::NotFound) => "missing",
        Err(e) => {
            warn!("Readiness: profile store unreadable: {}", e);
            "unhealthy"
        }
    };

    let ready = matches!(projects, Some(n) if n > 0) && profile_status == "ok";

    let body = ReadinessResponse {
        status: if ready { "ok" } else { "unhealthy" },
        projects: projects.unwrap_or(0),
        profile: profile_status,
    };

    if ready {
        HttpResponse::Ok().json(body)
    } else {
        HttpResponse::ServiceUnavailable().json(body)
    }
}
