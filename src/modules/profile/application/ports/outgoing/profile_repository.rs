use async_trait::async_trait;

use crate::profile::domain::Profile;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProfileRepositoryError {
    #[error("Store error: {0}")]
    StoreError(String),
}

#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// Replaces the stored profile wholesale; nothing is merged.
    async fn replace_profile(&self, profile: Profile) -> Result<Profile, ProfileRepositoryError>;
}
