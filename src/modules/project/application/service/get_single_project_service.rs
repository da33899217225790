use async_trait::async_trait;

use crate::modules::project::application::ports::incoming::use_cases::{
    GetSingleProjectError, GetSingleProjectUseCase,
};
use crate::modules::project::application::ports::outgoing::{ProjectQuery, ProjectQueryError};
use crate::modules::project::domain::{Project, ProjectId};

pub struct GetSingleProjectService<Q>
where
    Q: ProjectQuery,
{
    query: Q,
}

impl<Q> GetSingleProjectService<Q>
where
    Q: ProjectQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetSingleProjectUseCase for GetSingleProjectService<Q>
where
    Q: ProjectQuery + Send + Sync,
{
    async fn execute(&self, id: &ProjectId) -> Result<Project, GetSingleProjectError> {
        self.query
            .get_by_id(id)
            .await
            .map_err(|e| match e {
                ProjectQueryError::StoreError(msg) => GetSingleProjectError::RepositoryError(msg),
            })?
            .ok_or(GetSingleProjectError::NotFound)
    }
}
