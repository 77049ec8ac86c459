pub mod store;

// Re-export so code outside can do "use crate::session::{Session, SessionStore};"
pub use store::{Session, SessionStore};
