use async_trait::async_trait;

use crate::profile::domain::Profile;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ProfileQueryError {
    #[error("Store error: {0}")]
    StoreError(String),
}

#[async_trait]
pub trait ProfileQuery: Send + Sync {
    /// `Ok(None)` until a profile has been stored.
    async fn get_profile(&self) -> Result<Option<Profile>, ProfileQueryError>;
}
