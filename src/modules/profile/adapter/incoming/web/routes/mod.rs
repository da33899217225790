pub mod download_resume;
pub mod get_profile;

pub use download_resume::*;
pub use get_profile::*;
