use async_trait::async_trait;

use crate::modules::project::application::ports::incoming::use_cases::{
    GetFeaturedProjectsError, GetFeaturedProjectsUseCase,
};
use crate::modules::project::application::ports::outgoing::ProjectQuery;
use crate::modules::project::domain::Project;

pub struct GetFeaturedProjectsService<Q>
where
    Q: ProjectQuery,
{
    query: Q,
}

impl<Q> GetFeaturedProjectsService<Q>
where
    Q: ProjectQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetFeaturedProjectsUseCase for GetFeaturedProjectsService<Q>
where
    Q: ProjectQuery + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<Project>, GetFeaturedProjectsError> {
        self.query
            .list_featured()
            .await
            .map_err(GetFeaturedProjectsError::from)
    }
}
