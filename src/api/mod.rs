pub mod base;
pub mod http_api;

// Re-export so code outside can do "use crate::api::{AuthApi, HttpAuthApi};"
pub use base::AuthApi;
pub use http_api::HttpAuthApi;
