mod create_project;
mod get_category_rails;
mod get_featured_projects;
mod get_projects;
mod get_projects_by_category;
mod get_single_project;
mod search_projects;

pub use create_project::{CreateProjectError, CreateProjectUseCase};
pub use get_category_rails::{CategoryRail, GetCategoryRailsUseCase, RailState};
pub use get_featured_projects::{GetFeaturedProjectsError, GetFeaturedProjectsUseCase};
pub use get_projects::{GetProjectsError, GetProjectsUseCase};
pub use get_projects_by_category::{GetProjectsByCategoryError, GetProjectsByCategoryUseCase};
pub use get_single_project::{GetSingleProjectError, GetSingleProjectUseCase};
pub use search_projects::{SearchProjectsError, SearchProjectsUseCase};
