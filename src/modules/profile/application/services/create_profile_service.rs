use async_trait::async_trait;
use email_address::EmailAddress;

use crate::profile::application::ports::outgoing::{ProfileRepository, ProfileRepositoryError};
use crate::profile::application::use_cases::create_profile::{
    CreateProfileError, CreateProfileUseCase,
};
use crate::profile::domain::Profile;

pub struct CreateProfileService<R>
where
    R: ProfileRepository,
{
    repository: R,
}

impl<R> CreateProfileService<R>
where
    R: ProfileRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn normalize(mut profile: Profile) -> Result<Profile, CreateProfileError> {
    profile.name = profile.name.trim().to_string();
    if profile.name.is_empty() {
        return Err(CreateProfileError::InvalidInput(
            "name must not be empty".to_string(),
        ));
    }

    profile.email = profile.email.trim().to_string();
    if !EmailAddress::is_valid(&profile.email) {
        return Err(CreateProfileError::InvalidInput(format!(
            "invalid email address: {}",
            profile.email
        )));
    }

    profile.resume_url = non_blank(profile.resume_url);
    profile.social.linkedin = non_blank(profile.social.linkedin);
    profile.social.github = non_blank(profile.social.github);
    profile.social.twitter = non_blank(profile.social.twitter);

    Ok(profile)
}

#[async_trait]
impl<R> CreateProfileUseCase for CreateProfileService<R>
where
    R: ProfileRepository + Send + Sync,
{
    async fn execute(&self, profile: Profile) -> Result<Profile, CreateProfileError> {
        let profile = normalize(profile)?;

        self.repository
            .replace_profile(profile)
            .await
            .map_err(|e| match e {
                ProfileRepositoryError::StoreError(msg) => CreateProfileError::RepositoryError(msg),
            })
    }
}
