use async_trait::async_trait;

use crate::modules::project::application::ports::incoming::use_cases::{
    SearchProjectsError, SearchProjectsUseCase,
};
use crate::modules::project::application::ports::outgoing::ProjectQuery;
use crate::modules::project::domain::{rank_projects, Project, SearchLabels};

// ============================================================================
// Service Implementation
// ============================================================================

/// Full rescan of the catalogue on every call; the data set is small and
/// ordering must stay exactly reproducible.
pub struct SearchProjectsService<Q>
where
    Q: ProjectQuery,
{
    query: Q,
    labels: SearchLabels,
}

impl<Q> SearchProjectsService<Q>
where
    Q: ProjectQuery,
{
    pub fn new(query: Q, labels: SearchLabels) -> Self {
        Self { query, labels }
    }
}

#[async_trait]
impl<Q> SearchProjectsUseCase for SearchProjectsService<Q>
where
    Q: ProjectQuery + Send + Sync,
{
    async fn execute(&self, query: &str) -> Result<Vec<Project>, SearchProjectsError> {
        if query.trim().is_empty() {
            return Ok(Vec::new());
        }

        let catalog = self.query.list_all().await?;
        Ok(rank_projects(query, &catalog, &self.labels))
    }
}
