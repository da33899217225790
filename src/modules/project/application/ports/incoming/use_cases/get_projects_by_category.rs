use async_trait::async_trait;

use crate::modules::project::application::ports::outgoing::ProjectQueryError;
use crate::modules::project::domain::Project;

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetProjectsByCategoryError {
    #[error("Query failed: {0}")]
    QueryFailed(String),
}

impl From<ProjectQueryError> for GetProjectsByCategoryError {
    fn from(err: ProjectQueryError) -> Self {
        match err {
            ProjectQueryError::StoreError(msg) => GetProjectsByCategoryError::QueryFailed(msg),
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait GetProjectsByCategoryUseCase: Send + Sync {
    /// Takes the raw category name from the request. An unknown name is not
    /// an error: it simply selects nothing.
    async fn execute(&self, category: &str) -> Result<Vec<Project>, GetProjectsByCategoryError>;
}
