use async_trait::async_trait;

use crate::profile::application::use_cases::create_profile::{
    CreateProfileError, CreateProfileUseCase,
};
use crate::profile::application::use_cases::download_resume::{
    DownloadResumeError, DownloadResumeUseCase, ResumeLink,
};
use crate::profile::application::use_cases::get_profile::{GetProfileError, GetProfileUseCase};
use crate::profile::domain::Profile;
use crate::project::application::ports::incoming::use_cases::{
    CategoryRail, CreateProjectError, CreateProjectUseCase, GetCategoryRailsUseCase,
    GetFeaturedProjectsError, GetFeaturedProjectsUseCase, GetProjectsByCategoryError,
    GetProjectsByCategoryUseCase, GetProjectsError, GetProjectsUseCase, GetSingleProjectError,
    GetSingleProjectUseCase, SearchProjectsError, SearchProjectsUseCase,
};
use crate::project::application::ports::outgoing::{
    CreateProjectData, ProjectQuery, ProjectQueryError,
};
use crate::project::domain::{Category, Project, ProjectId};

// ============================================================================
// Outgoing port stubs
// ============================================================================

/// Every read fails with `StoreError(message)`.
#[derive(Clone)]
pub struct FailingProjectQuery {
    message: String,
}

impl FailingProjectQuery {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }

    fn err<T>(&self) -> Result<T, ProjectQueryError> {
        Err(ProjectQueryError::StoreError(self.message.clone()))
    }
}

#[async_trait]
impl ProjectQuery for FailingProjectQuery {
    async fn list_all(&self) -> Result<Vec<Project>, ProjectQueryError> {
        self.err()
    }

    async fn list_by_category(
        &self,
        _category: Category,
    ) -> Result<Vec<Project>, ProjectQueryError> {
        self.err()
    }

    async fn list_featured(&self) -> Result<Vec<Project>, ProjectQueryError> {
        self.err()
    }

    async fn get_by_id(&self, _id: &ProjectId) -> Result<Option<Project>, ProjectQueryError> {
        self.err()
    }
}

// ============================================================================
// Project use case stubs
// ============================================================================

#[derive(Clone)]
pub struct StubGetProjectsUseCase {
    result: Result<Vec<Project>, GetProjectsError>,
}

impl StubGetProjectsUseCase {
    pub fn success(projects: Vec<Project>) -> Self {
        Self {
            result: Ok(projects),
        }
    }

    pub fn error(err: GetProjectsError) -> Self {
        Self { result: Err(err) }
    }
}

#[async_trait]
impl GetProjectsUseCase for StubGetProjectsUseCase {
    async fn execute(&self) -> Result<Vec<Project>, GetProjectsError> {
        self.result.clone()
    }
}

#[derive(Clone)]
pub struct StubGetFeaturedProjectsUseCase {
    result: Result<Vec<Project>, GetFeaturedProjectsError>,
}

impl StubGetFeaturedProjectsUseCase {
    pub fn success(projects: Vec<Project>) -> Self {
        Self {
            result: Ok(projects),
        }
    }

    pub fn error(err: GetFeaturedProjectsError) -> Self {
        Self { result: Err(err) }
    }
}

#[async_trait]
impl GetFeaturedProjectsUseCase for StubGetFeaturedProjectsUseCase {
    async fn execute(&self) -> Result<Vec<Project>, GetFeaturedProjectsError> {
        self.result.clone()
    }
}

#[derive(Clone)]
pub struct StubGetProjectsByCategoryUseCase {
    result: Result<Vec<Project>, GetProjectsByCategoryError>,
}

impl StubGetProjectsByCategoryUseCase {
    pub fn success(projects: Vec<Project>) -> Self {
        Self {
            result: Ok(projects),
        }
    }
}

#[async_trait]
impl GetProjectsByCategoryUseCase for StubGetProjectsByCategoryUseCase {
    async fn execute(&self, _category: &str) -> Result<Vec<Project>, GetProjectsByCategoryError> {
        self.result.clone()
    }
}

#[derive(Clone)]
pub struct StubGetSingleProjectUseCase {
    result: Result<Project, GetSingleProjectError>,
}

impl StubGetSingleProjectUseCase {
    pub fn found(project: Project) -> Self {
        Self {
            result: Ok(project),
        }
    }

    pub fn not_found() -> Self {
        Self {
            result: Err(GetSingleProjectError::NotFound),
        }
    }

    pub fn error(msg: &str) -> Self {
        Self {
            result: Err(GetSingleProjectError::RepositoryError(msg.to_string())),
        }
    }
}

#[async_trait]
impl GetSingleProjectUseCase for StubGetSingleProjectUseCase {
    async fn execute(&self, _id: &ProjectId) -> Result<Project, GetSingleProjectError> {
        self.result.clone()
    }
}

#[derive(Clone)]
pub struct StubSearchProjectsUseCase {
    result: Result<Vec<Project>, SearchProjectsError>,
}

impl StubSearchProjectsUseCase {
    pub fn success(projects: Vec<Project>) -> Self {
        Self {
            result: Ok(projects),
        }
    }

    pub fn error(err: SearchProjectsError) -> Self {
        Self { result: Err(err) }
    }
}

#[async_trait]
impl SearchProjectsUseCase for StubSearchProjectsUseCase {
    async fn execute(&self, _query: &str) -> Result<Vec<Project>, SearchProjectsError> {
        self.result.clone()
    }
}

#[derive(Clone)]
pub struct StubGetCategoryRailsUseCase {
    rails: Vec<CategoryRail>,
}

impl StubGetCategoryRailsUseCase {
    pub fn new(rails: Vec<CategoryRail>) -> Self {
        Self { rails }
    }
}

#[async_trait]
impl GetCategoryRailsUseCase for StubGetCategoryRailsUseCase {
    async fn execute(&self) -> Vec<CategoryRail> {
        self.rails.clone()
    }
}

#[derive(Clone)]
pub struct StubCreateProjectUseCase {
    result: Result<Project, CreateProjectError>,
}

impl StubCreateProjectUseCase {
    pub fn repo_error(msg: &str) -> Self {
        Self {
            result: Err(CreateProjectError::RepositoryError(msg.to_string())),
        }
    }
}

#[async_trait]
impl CreateProjectUseCase for StubCreateProjectUseCase {
    async fn execute(&self, _data: CreateProjectData) -> Result<Project, CreateProjectError> {
        self.result.clone()
    }
}

// ============================================================================
// Profile use case stubs
// ============================================================================

#[derive(Clone)]
pub struct StubGetProfileUseCase {
    result: Result<Profile, GetProfileError>,
}

impl StubGetProfileUseCase {
    pub fn found(profile: Profile) -> Self {
        Self {
            result: Ok(profile),
        }
    }

    pub fn not_found() -> Self {
        Self {
            result: Err(GetProfileError::NotFound),
        }
    }

    pub fn error(msg: &str) -> Self {
        Self {
            result: Err(GetProfileError::RepositoryError(msg.to_string())),
        }
    }
}

#[async_trait]
impl GetProfileUseCase for StubGetProfileUseCase {
    async fn execute(&self) -> Result<Profile, GetProfileError> {
        self.result.clone()
    }
}

#[derive(Clone)]
pub struct StubDownloadResumeUseCase {
    result: Result<ResumeLink, DownloadResumeError>,
}

impl StubDownloadResumeUseCase {
    pub fn link(url: &str) -> Self {
        Self {
            result: Ok(ResumeLink {
                message: "Resume download initiated".to_string(),
                url: url.to_string(),
            }),
        }
    }

    pub fn failing(err: DownloadResumeError) -> Self {
        Self { result: Err(err) }
    }
}

#[async_trait]
impl DownloadResumeUseCase for StubDownloadResumeUseCase {
    async fn execute(&self) -> Result<ResumeLink, DownloadResumeError> {
        self.result.clone()
    }
}

#[derive(Clone)]
pub struct StubCreateProfileUseCase {
    result: Result<Profile, CreateProfileError>,
}

impl StubCreateProfileUseCase {
    pub fn repo_error(msg: &str) -> Self {
        Self {
            result: Err(CreateProfileError::RepositoryError(msg.to_string())),
        }
    }
}

#[async_trait]
impl CreateProfileUseCase for StubCreateProfileUseCase {
    async fn execute(&self, _profile: Profile) -> Result<Profile, CreateProfileError> {
        self.result.clone()
    }
}
