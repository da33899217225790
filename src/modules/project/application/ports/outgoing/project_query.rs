// src/modules/project/application/ports/outgoing/project_query.rs

use async_trait::async_trait;

use crate::modules::project::domain::{Category, Project, ProjectId};

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum ProjectQueryError {
    #[error("Store error: {0}")]
    StoreError(String),
}

//
// ──────────────────────────────────────────────────────────
// Port (read side)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait ProjectQuery: Send + Sync {
    /// Every project, insertion order.
    async fn list_all(&self) -> Result<Vec<Project>, ProjectQueryError>;

    /// Projects tagged with `category`, in `list_all` order.
    async fn list_by_category(&self, category: Category)
        -> Result<Vec<Project>, ProjectQueryError>;

    async fn list_featured(&self) -> Result<Vec<Project>, ProjectQueryError>;

    /// Absence is `Ok(None)`, never an error.
    async fn get_by_id(&self, id: &ProjectId) -> Result<Option<Project>, ProjectQueryError>;
}
