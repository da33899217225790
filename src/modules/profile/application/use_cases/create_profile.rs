use async_trait::async_trait;

use crate::profile::domain::Profile;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CreateProfileError {
    #[error("Invalid profile: {0}")]
    InvalidInput(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait CreateProfileUseCase: Send + Sync {
    /// Stores `profile` as the one and only profile, replacing any previous one.
    async fn execute(&self, profile: Profile) -> Result<Profile, CreateProfileError>;
}
