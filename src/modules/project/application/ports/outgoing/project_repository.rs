// src/modules/project/application/ports/outgoing/project_repository.rs

use async_trait::async_trait;

use crate::modules::project::domain::{Category, Project, ProjectId};

//
// ──────────────────────────────────────────────────────────
// DTOs
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Default)]
pub struct CreateProjectData {
    /// Generated when absent
    pub id: Option<ProjectId>,

    pub title: String,
    pub description: String,
    pub details: Option<String>,
    pub image: Option<String>,
    pub video: Option<String>,
    pub technologies: Vec<String>,
    pub categories: Vec<Category>,

    /// Empty strings are treated as "no link"
    pub live_url: Option<String>,
    pub github_url: Option<String>,

    pub featured: bool,
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProjectRepositoryError {
    #[error("Project id already exists: {0}")]
    DuplicateId(ProjectId),

    #[error("Store error: {0}")]
    StoreError(String),
}

//
// ──────────────────────────────────────────────────────────
// Port (write side)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait ProjectRepository: Send + Sync {
    /// Appends a project. Ids are unique across the store.
    async fn insert(&self, project: Project) -> Result<Project, ProjectRepositoryError>;
}
