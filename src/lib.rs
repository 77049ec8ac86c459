//! Library exports for lexgate, the session and navigation-gating core of
//! the legal consultation client.

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod session;
pub mod state;
pub mod storage;
pub mod utils;

pub use error::AuthError;
pub use state::AppContext;
