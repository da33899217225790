use async_trait::async_trait;

use crate::modules::project::domain::{Project, ProjectId};

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetSingleProjectError {
    #[error("Project not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait GetSingleProjectUseCase: Send + Sync {
    async fn execute(&self, id: &ProjectId) -> Result<Project, GetSingleProjectError>;
}
