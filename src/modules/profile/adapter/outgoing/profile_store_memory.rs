use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::profile::application::ports::outgoing::{
    ProfileQuery, ProfileQueryError, ProfileRepository, ProfileRepositoryError,
};
use crate::profile::domain::Profile;

/// Holds at most one profile. Clones share the same slot.
#[derive(Clone, Default)]
pub struct ProfileStoreMemory {
    slot: Arc<RwLock<Option<Profile>>>,
}

impl ProfileStoreMemory {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn is_set(&self) -> bool {
        self.slot.read().await.is_some()
    }
}

#[async_trait]
impl ProfileQuery for ProfileStoreMemory {
    async fn get_profile(&self) -> Result<Option<Profile>, ProfileQueryError> {
        Ok(self.slot.read().await.clone())
    }
}

#[async_trait]
impl ProfileRepository for ProfileStoreMemory {
    async fn replace_profile(&self, profile: Profile) -> Result<Profile, ProfileRepositoryError> {
        *self.slot.write().await = Some(profile.clone());
        Ok(profile)
    }
}
