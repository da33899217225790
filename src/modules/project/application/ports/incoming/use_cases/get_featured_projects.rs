use async_trait::async_trait;

use crate::modules::project::application::ports::outgoing::ProjectQueryError;
use crate::modules::project::domain::Project;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetFeaturedProjectsError {
    #[error("Query failed: {0}")]
    QueryFailed(String),
}

impl From<ProjectQueryError> for GetFeaturedProjectsError {
    fn from(err: ProjectQueryError) -> Self {
        match err {
            ProjectQueryError::StoreError(msg) => GetFeaturedProjectsError::QueryFailed(msg),
        }
    }
}

#[async_trait]
pub trait GetFeaturedProjectsUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<Project>, GetFeaturedProjectsError>;
}
