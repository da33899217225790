use async_trait::async_trait;
use tracing::debug;

use crate::modules::project::application::ports::incoming::use_cases::{
    GetProjectsByCategoryError, GetProjectsByCategoryUseCase,
};
use crate::modules::project::application::ports::outgoing::ProjectQuery;
use crate::modules::project::domain::{Category, Project};

pub struct GetProjectsByCategoryService<Q>
where
    Q: ProjectQuery,
{
    query: Q,
}

impl<Q> GetProjectsByCategoryService<Q>
where
    Q: ProjectQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetProjectsByCategoryUseCase for GetProjectsByCategoryService<Q>
where
    Q: ProjectQuery + Send + Sync,
{
    async fn execute(&self, category: &str) -> Result<Vec<Project>, GetProjectsByCategoryError> {
        let Some(category) = Category::from_exact(category) else {
            debug!("no category named {category:?}; returning empty list");
            return Ok(Vec::new());
        };

        self.query
            .list_by_category(category)
            .await
            .map_err(GetProjectsByCategoryError::from)
    }
}
