mod get_category_rails;
mod get_featured_projects;
mod get_projects;
mod get_projects_by_category;
mod get_single_project;
mod search_projects;

pub use get_category_rails::*;
pub use get_featured_projects::*;
pub use get_projects::*;
pub use get_projects_by_category::*;
pub use get_single_project::*;
pub use search_projects::*;
