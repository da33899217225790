use std::sync::Arc;

use actix_web::web;

use crate::profile::application::profile_use_cases::ProfileUseCases;
use crate::profile::application::use_cases::{
    download_resume::{DownloadResumeError, DownloadResumeUseCase},
    get_profile::GetProfileUseCase,
};
use crate::project::application::ports::incoming::use_cases::{
    GetCategoryRailsUseCase, GetFeaturedProjectsUseCase, GetProjectsByCategoryUseCase,
    GetProjectsUseCase, GetSingleProjectUseCase, SearchProjectsUseCase,
};
use crate::project::application::project_use_cases::ProjectUseCases;
use crate::tests::support::stubs::*;
use crate::AppState;

/// Every use case starts as an inert stub; tests swap in the one under test.
pub struct TestAppStateBuilder {
    project: ProjectUseCases,
    profile: ProfileUseCases,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            project: ProjectUseCases {
                create: Arc::new(StubCreateProjectUseCase::repo_error("not used in this test")),
                get_list: Arc::new(StubGetProjectsUseCase::success(vec![])),
                get_by_category: Arc::new(StubGetProjectsByCategoryUseCase::success(vec![])),
                get_featured: Arc::new(StubGetFeaturedProjectsUseCase::success(vec![])),
                get_single: Arc::new(StubGetSingleProjectUseCase::not_found()),
                search: Arc::new(StubSearchProjectsUseCase::success(vec![])),
                get_rails: Arc::new(StubGetCategoryRailsUseCase::new(vec![])),
            },
            profile: ProfileUseCases {
                get: Arc::new(StubGetProfileUseCase::not_found()),
                download_resume: Arc::new(StubDownloadResumeUseCase::failing(
                    DownloadResumeError::ProfileNotFound,
                )),
                create: Arc::new(StubCreateProfileUseCase::repo_error("not used in this test")),
            },
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_get_projects(mut self, uc: impl GetProjectsUseCase + Send + Sync + 'static) -> Self {
        self.project.get_list = Arc::new(uc);
        self
    }

    pub fn with_get_featured_projects(
        mut self,
        uc: impl GetFeaturedProjectsUseCase + Send + Sync + 'static,
    ) -> Self {
        self.project.get_featured = Arc::new(uc);
        self
    }

    pub fn with_get_projects_by_category(
        mut self,
        uc: impl GetProjectsByCategoryUseCase + Send + Sync + 'static,
    ) -> Self {
        self.project.get_by_category = Arc::new(uc);
        self
    }

    pub fn with_get_category_rails(
        mut self,
        uc: impl GetCategoryRailsUseCase + Send + Sync + 'static,
    ) -> Self {
        self.project.get_rails = Arc::new(uc);
        self
    }

    pub fn with_search_projects(
        mut self,
        uc: impl SearchProjectsUseCase + Send + Sync + 'static,
    ) -> Self {
        self.project.search = Arc::new(uc);
        self
    }

    pub fn with_get_single_project(
        mut self,
        uc: impl GetSingleProjectUseCase + Send + Sync + 'static,
    ) -> Self {
        self.project.get_single = Arc::new(uc);
        self
    }

    pub fn with_get_profile(mut self, uc: impl GetProfileUseCase + Send + Sync + 'static) -> Self {
        self.profile.get = Arc::new(uc);
        self
    }

    pub fn with_download_resume(
        mut self,
        uc: impl DownloadResumeUseCase + Send + Sync + 'static,
    ) -> Self {
        self.profile.download_resume = Arc::new(uc);
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            project: self.project,
            profile: self.profile,
        })
    }
}
