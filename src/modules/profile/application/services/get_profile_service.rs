use async_trait::async_trait;

use crate::profile::application::ports::outgoing::{ProfileQuery, ProfileQueryError};
use crate::profile::application::use_cases::get_profile::{GetProfileError, GetProfileUseCase};
use crate::profile::domain::Profile;

//
// ──────────────────────────────────────────────────────────
// Service
// ──────────────────────────────────────────────────────────
//

pub struct GetProfileService<Q>
where
    Q: ProfileQuery,
{
    query: Q,
}

impl<Q> GetProfileService<Q>
where
    Q: ProfileQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetProfileUseCase for GetProfileService<Q>
where
    Q: ProfileQuery + Send + Sync,
{
    async fn execute(&self) -> Result<Profile, GetProfileError> {
        let profile = self.query.get_profile().await.map_err(|e| match e {
            ProfileQueryError::StoreError(msg) => GetProfileError::RepositoryError(msg),
        })?;

        profile.ok_or(GetProfileError::NotFound)
    }
}

//
// ──────────────────────────────────────────────────────────
// Unit tests (service only)
// ──────────────────────────────────────────────────────────
//
