use std::sync::Arc;

use crate::modules::project::application::ports::incoming::use_cases::{
    CreateProjectUseCase, GetCategoryRailsUseCase, GetFeaturedProjectsUseCase,
    GetProjectsByCategoryUseCase, GetProjectsUseCase, GetSingleProjectUseCase,
    SearchProjectsUseCase,
};

#[derive(Clone)]
pub struct ProjectUseCases {
    pub create: Arc<dyn CreateProjectUseCase + Send + Sync>,
    pub get_list: Arc<dyn GetProjectsUseCase + Send + Sync>,
    pub get_by_category: Arc<dyn GetProjectsByCategoryUseCase + Send + Sync>,
    pub get_featured: Arc<dyn GetFeaturedProjectsUseCase + Send + Sync>,
    pub get_single: Arc<dyn GetSingleProjectUseCase + Send + Sync>,
    pub search: Arc<dyn SearchProjectsUseCase + Send + Sync>,
    pub get_rails: Arc<dyn GetCategoryRailsUseCase + Send + Sync>,
}
