pub mod keep_alive;
pub mod profile;
pub mod project;
