use std::sync::Arc;

use crate::profile::application::use_cases::{
    create_profile::CreateProfileUseCase, download_resume::DownloadResumeUseCase,
    get_profile::GetProfileUseCase,
};

#[derive(Clone)]
pub struct ProfileUseCases {
    pub get: Arc<dyn GetProfileUseCase + Send + Sync>,
    pub download_resume: Arc<dyn DownloadResumeUseCase + Send + Sync>,
    pub create: Arc<dyn CreateProfileUseCase + Send + Sync>,
}
