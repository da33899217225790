pub mod entities;
pub mod search;

pub use entities::{Category, Project, ProjectId, UnknownCategory};
pub use search::{rank_projects, SearchLabels};
