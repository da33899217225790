mod create_profile_service;
mod download_resume_service;
mod get_profile_service;

pub use create_profile_service::CreateProfileService;
pub use download_resume_service::DownloadResumeService;
pub use get_profile_service::GetProfileService;
