use async_trait::async_trait;

use crate::profile::application::ports::outgoing::{ProfileQuery, ProfileQueryError};
use crate::profile::application::use_cases::download_resume::{
    DownloadResumeError, DownloadResumeUseCase, ResumeLink,
};

pub struct DownloadResumeService<Q>
where
    Q: ProfileQuery,
{
    query: Q,
}

impl<Q> DownloadResumeService<Q>
where
    Q: ProfileQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> DownloadResumeUseCase for DownloadResumeService<Q>
where
    Q: ProfileQuery + Send + Sync,
{
    async fn execute(&self) -> Result<ResumeLink, DownloadResumeError> {
        let profile = self
            .query
            .get_profile()
            .await
            .map_err(|e| match e {
                ProfileQueryError::StoreError(msg) => DownloadResumeError::RepositoryError(msg),
            })?
            .ok_or(DownloadResumeError::ProfileNotFound)?;

        match profile.resume_url {
            Some(url) if !url.trim().is_empty() => Ok(ResumeLink {
                message: "Resume download initiated".to_string(),
                url,
            }),
            _ => Err(DownloadResumeError::ResumeNotAvailable),
        }
    }
}
