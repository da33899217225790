pub mod create_profile;
pub mod download_resume;
pub mod get_profile;
