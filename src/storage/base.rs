use std::sync::Arc;

use tracing::{info, warn};

use super::{file_store::FileTokenStorage, memory_store::MemoryTokenStorage};
use crate::config::{StorageBackend, StorageConfig};

/// Durable client-side home of the single token key.
///
/// The contract is deliberately infallible: logout must always succeed, so a
/// backend that cannot reach its medium degrades (and logs) rather than
/// returning an error to the session.
pub trait TokenStorage: Send + Sync {
    /// The persisted token, if any. Absence means anonymous on startup.
    fn load(&self) -> Option<String>;
    /// Persist the token, replacing any previous value.
    fn store(&self, token: &str);
    /// Remove the token. Idempotent.
    fn clear(&self);
}

/// Creates a concrete storage implementation based on the StorageConfig.
/// If `storage.enabled = false`, the token only lives in memory for the
/// lifetime of the application.
pub fn create_storage(config: &StorageConfig) -> Arc<dyn TokenStorage> {
    if !config.enabled {
        info!("Token persistence is disabled. Using in-memory storage.");
        return Arc::new(MemoryTokenStorage::new());
    }

    match &config.backend {
        Some(StorageBackend::File(file_config)) => {
            info!("Using file token storage at '{}'.", file_config.path);
            Arc::new(FileTokenStorage::new(&file_config.path))
        }
        None => {
            warn!("Storage is enabled but no backend is configured; falling back to in-memory.");
            Arc::new(MemoryTokenStorage::new())
        }
    }
}
