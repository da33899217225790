pub mod api;
pub mod config;
pub mod health;
pub mod modules;
pub mod seed;
pub mod shared;

pub use modules::keep_alive;
pub use modules::profile;
pub use modules::project;

use std::sync::Arc;

use actix_web::web;

use crate::profile::adapter::outgoing::profile_store_memory::ProfileStoreMemory;
use crate::profile::application::profile_use_cases::ProfileUseCases;
use crate::profile::application::services::{
    CreateProfileService, DownloadResumeService, GetProfileService,
};
use crate::project::adapter::outgoing::project_store_memory::ProjectStoreMemory;
use crate::project::application::project_use_cases::ProjectUseCases;
use crate::project::application::service::{
    CreateProjectService, GetCategoryRailsService, GetFeaturedProjectsService,
    GetProjectsByCategoryService, GetProjectsService, GetSingleProjectService,
    SearchProjectsService,
};
use crate::project::domain::{Category, SearchLabels};

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub project: ProjectUseCases,
    pub profile: ProfileUseCases,
}

/// Wires every use case against the given in-memory stores.
///
/// Both stores are cheap handles over shared state, so the same instance
/// backs the read and write sides.
pub fn build_app_state(
    project_store: ProjectStoreMemory,
    profile_store: ProfileStoreMemory,
    labels: SearchLabels,
) -> AppState {
    let get_by_category = Arc::new(GetProjectsByCategoryService::new(project_store.clone()));

    let project = ProjectUseCases {
        create: Arc::new(CreateProjectService::new(project_store.clone())),
        get_list: Arc::new(GetProjectsService::new(project_store.clone())),
        get_by_category: get_by_category.clone(),
        get_featured: Arc::new(GetFeaturedProjectsService::new(project_store.clone())),
        get_single: Arc::new(GetSingleProjectService::new(project_store.clone())),
        search: Arc::new(SearchProjectsService::new(project_store, labels)),
        get_rails: Arc::new(GetCategoryRailsService::new(
            get_by_category,
            Category::ALL.to_vec(),
        )),
    };

    let profile = ProfileUseCases {
        get: Arc::new(GetProfileService::new(profile_store.clone())),
        download_resume: Arc::new(DownloadResumeService::new(profile_store.clone())),
        create: Arc::new(CreateProfileService::new(profile_store)),
    };

    AppState { project, profile }
}

#[cfg(not(tarpaulin_include))]
pub fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::api_health);
    cfg.service(crate::health::readiness);
    // Projects: fixed segments before the `{id}` catch-all
    cfg.service(crate::project::adapter::incoming::web::routes::get_projects_handler);
    cfg.service(crate::project::adapter::incoming::web::routes::get_featured_projects_handler);
    cfg.service(crate::project::adapter::incoming::web::routes::get_category_rails_handler);
    cfg.service(crate::project::adapter::incoming::web::routes::search_projects_handler);
    cfg.service(crate::project::adapter::incoming::web::routes::get_projects_by_category_handler);
    cfg.service(crate::project::adapter::incoming::web::routes::get_single_project_handler);
    // Profile
    cfg.service(crate::profile::adapter::incoming::web::routes::get_profile_handler);
    cfg.service(crate::profile::adapter::incoming::web::routes::download_resume_handler);
}
