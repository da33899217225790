use async_trait::async_trait;

use crate::modules::project::application::ports::outgoing::ProjectQueryError;
use crate::modules::project::domain::Project;

#[derive(Debug, Clone, thiserror::Error)]
pub enum SearchProjectsError {
    #[error("Query failed: {0}")]
    QueryFailed(String),
}

impl From<ProjectQueryError> for SearchProjectsError {
    fn from(err: ProjectQueryError) -> Self {
        match err {
            ProjectQueryError::StoreError(msg) => SearchProjectsError::QueryFailed(msg),
        }
    }
}

#[async_trait]
pub trait SearchProjectsUseCase: Send + Sync {
    /// Ranked matches for a free-text query; blank queries match nothing.
    async fn execute(&self, query: &str) -> Result<Vec<Project>, SearchProjectsError>;
}
