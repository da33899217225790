use async_trait::async_trait;

use crate::modules::project::application::ports::incoming::use_cases::{
    CreateProjectError, CreateProjectUseCase,
};
use crate::modules::project::application::ports::outgoing::project_repository::{
    CreateProjectData, ProjectRepository, ProjectRepositoryError,
};
use crate::modules::project::domain::{Project, ProjectId};

//
// ──────────────────────────────────────────────────────────
// Service
// ──────────────────────────────────────────────────────────
//

pub struct CreateProjectService<R>
where
    R: ProjectRepository,
{
    project_repository: R,
}

impl<R> CreateProjectService<R>
where
    R: ProjectRepository,
{
    pub fn new(project_repository: R) -> Self {
        Self { project_repository }
    }
}

/// Blank links mean "no link".
fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn build_project(data: CreateProjectData) -> Result<Project, CreateProjectError> {
    let title = data.title.trim().to_string();
    if title.is_empty() {
        return Err(CreateProjectError::InvalidInput(
            "title must not be empty".to_string(),
        ));
    }

    let id = match data.id {
        Some(id) if id.as_str().trim().is_empty() => {
            return Err(CreateProjectError::InvalidInput(
                "id must not be blank".to_string(),
            ))
        }
        Some(id) => id,
        None => ProjectId::generate(),
    };

    let mut categories = Vec::with_capacity(data.categories.len());
    for category in data.categories {
        if !categories.contains(&category) {
            categories.push(category);
        }
    }

    Ok(Project {
        id,
        title,
        description: data.description,
        details: non_blank(data.details),
        image: non_blank(data.image),
        video: non_blank(data.video),
        technologies: data.technologies,
        categories,
        live_url: non_blank(data.live_url),
        github_url: non_blank(data.github_url),
        featured: data.featured,
    })
}

#[async_trait]
impl<R> CreateProjectUseCase for CreateProjectService<R>
where
    R: ProjectRepository + Send + Sync,
{
    async fn execute(&self, data: CreateProjectData) -> Result<Project, CreateProjectError> {
        let project = build_project(data)?;

        self.project_repository
            .insert(project)
            .await
            .map_err(|e| match e {
                ProjectRepositoryError::DuplicateId(id) => CreateProjectError::DuplicateId(id),
                ProjectRepositoryError::StoreError(msg) => CreateProjectError::RepositoryError(msg),
            })
    }
}
