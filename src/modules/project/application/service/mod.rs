mod create_project_service;
mod get_category_rails_service;
mod get_featured_projects_service;
mod get_projects_by_category_service;
mod get_projects_service;
mod get_single_project_service;
mod search_projects_service;

pub use create_project_service::CreateProjectService;
pub use get_category_rails_service::GetCategoryRailsService;
pub use get_featured_projects_service::GetFeaturedProjectsService;
pub use get_projects_by_category_service::GetProjectsByCategoryService;
pub use get_projects_service::GetProjectsService;
pub use get_single_project_service::GetSingleProjectService;
pub use search_projects_service::SearchProjectsService;
