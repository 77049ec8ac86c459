use std::fs;
use std::path::PathBuf;

use tracing::{debug, warn};

use super::TokenStorage;

/// File-backed token storage: one file holding the raw credential string.
///
/// This is the durable-storage analog of the browser's single localStorage
/// key. IO failures are logged and swallowed so session operations (logout in
/// particular) can never fail on a storage problem.
pub struct FileTokenStorage {
    path: PathBuf,
}

impl FileTokenStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl TokenStorage for FileTokenStorage {
    fn load(&self) -> Option<String> {
        match fs::read_to_string(&self.path) {
            Ok(raw) => {
                let token = raw.trim();
                if token.is_empty() {
                    None
                } else {
                    debug!("Restored token from '{}'", self.path.display());
                    Some(token.to_string())
                }
            }
            Err(_) => None,
        }
    }

    fn store(&self, token: &str) {
        if let Some(parent) = self.path.parent() {
            if let Err(e) = fs::create_dir_all(parent) {
                warn!("Could not create token storage directory: {}", e);
                return;
            }
        }
        if let Err(e) = fs::write(&self.path, token) {
            warn!("Could not persist token to '{}': {}", self.path.display(), e);
        }
    }

    fn clear(&self) {
        match fs::remove_file(&self.path) {
            Ok(()) => {}
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => warn!("Could not remove token file '{}': {}", self.path.display(), e),
        }
    }
}
