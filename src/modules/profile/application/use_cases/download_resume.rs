use async_trait::async_trait;
use serde::Serialize;
use utoipa::ToSchema;

/// Redirect-info payload: the client navigates to `url` itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct ResumeLink {
    #[schema(example = "Resume download initiated")]
    pub message: String,
    #[schema(example = "/assets/resume.pdf")]
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DownloadResumeError {
    #[error("Profile not found")]
    ProfileNotFound,

    #[error("No resume URL is set")]
    ResumeNotAvailable,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait DownloadResumeUseCase: Send + Sync {
    async fn execute(&self) -> Result<ResumeLink, DownloadResumeError>;
}
