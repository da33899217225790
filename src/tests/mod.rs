mod api_flow;
pub mod support;
