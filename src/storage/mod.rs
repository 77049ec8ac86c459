pub mod base;
pub mod file_store;
pub mod memory_store;

// Re-export the primary storage items so code outside can do
// "use crate::storage::{TokenStorage, create_storage};"
pub use base::{create_storage, TokenStorage};
pub use file_store::FileTokenStorage;
pub use memory_store::MemoryTokenStorage;
