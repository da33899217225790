pub mod api;
pub mod timing;
