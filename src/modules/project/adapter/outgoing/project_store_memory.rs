// src/modules/project/adapter/outgoing/project_store_memory.rs

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::modules::project::application::ports::outgoing::{
    ProjectQuery, ProjectQueryError, ProjectRepository, ProjectRepositoryError,
};
use crate::modules::project::domain::{Category, Project, ProjectId};

// ============================================================================
// State
// ============================================================================

#[derive(Debug, Default)]
struct Catalog {
    /// Insertion order
    projects: Vec<Project>,
    /// id -> position in `projects`
    index: HashMap<ProjectId, usize>,
}

impl Catalog {
    fn filtered<F>(&self, predicate: F) -> Vec<Project>
    where
        F: Fn(&Project) -> bool,
    {
        self.projects
            .iter()
            .filter(|p| predicate(p))
            .cloned()
            .collect()
    }
}

// ============================================================================
// Store Implementation
// ============================================================================

/// In-memory project catalogue. Clones share the same underlying state;
/// writes go through a single `RwLock` writer.
#[derive(Clone, Default)]
pub struct ProjectStoreMemory {
    catalog: Arc<RwLock<Catalog>>,
}

impl ProjectStoreMemory {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.catalog.read().await.projects.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl ProjectQuery for ProjectStoreMemory {
    async fn list_all(&self) -> Result<Vec<Project>, ProjectQueryError> {
        Ok(self.catalog.read().await.projects.clone())
    }

    async fn list_by_category(
        &self,
        category: Category,
    ) -> Result<Vec<Project>, ProjectQueryError> {
        Ok(self
            .catalog
            .read()
            .await
            .filtered(|p| p.has_category(category)))
    }

    async fn list_featured(&self) -> Result<Vec<Project>, ProjectQueryError> {
        Ok(self.catalog.read().await.filtered(|p| p.featured))
    }

    async fn get_by_id(&self, id: &ProjectId) -> Result<Option<Project>, ProjectQueryError> {
        let catalog = self.catalog.read().await;
        Ok(catalog
            .index
            .get(id)
            .and_then(|&pos| catalog.projects.get(pos))
            .cloned())
    }
}

#[async_trait]
impl ProjectRepository for ProjectStoreMemory {
    async fn insert(&self, project: Project) -> Result<Project, ProjectRepositoryError> {
        let mut catalog = self.catalog.write().await;

        if catalog.index.contains_key(&project.id) {
            return Err(ProjectRepositoryError::DuplicateId(project.id));
        }

        let position = catalog.projects.len();
        catalog.index.insert(project.id.clone(), position);
        catalog.projects.push(project.clone());

        Ok(project)
    }
}
