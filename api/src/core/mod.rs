pub mod app_state;
pub mod http;
pub mod report_cache;
