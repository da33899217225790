use async_trait::async_trait;
use std::fmt;

use crate::modules::project::application::ports::outgoing::CreateProjectData;
use crate::modules::project::domain::{Project, ProjectId};

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CreateProjectError {
    InvalidInput(String),
    DuplicateId(ProjectId),
    RepositoryError(String),
}

impl fmt::Display for CreateProjectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CreateProjectError::InvalidInput(msg) => write!(f, "invalid project: {}", msg),
            CreateProjectError::DuplicateId(id) => write!(f, "project id already exists: {}", id),
            CreateProjectError::RepositoryError(msg) => {
                write!(f, "repository error: {}", msg)
            }
        }
    }
}

impl std::error::Error for CreateProjectError {}

//
// ──────────────────────────────────────────────────────────
// Use case trait
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait CreateProjectUseCase: Send + Sync {
    async fn execute(&self, data: CreateProjectData) -> Result<Project, CreateProjectError>;
}
