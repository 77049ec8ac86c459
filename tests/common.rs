use std::path::PathBuf;

use tempfile::TempDir;

use lexgate::config::{
    ClientConfig, FileStorageConfig, LoggingConfig, ServiceConfig, StorageBackend, StorageConfig,
};
use lexgate::state::AppContext;

/// A context wired against a mock service, with its token file in a temp
/// directory that lives as long as the harness.
pub struct TestHarness {
    pub context: AppContext,
    pub token_path: PathBuf,
    _dir: TempDir,
}

pub fn build_context(service_url: &str) -> TestHarness {
    harness(service_url, None)
}

/// Same harness, but with a token already persisted before the context is
/// created, simulating a restart with a stored session.
pub fn build_context_with_stored_token(service_url: &str, token: &str) -> TestHarness {
    harness(service_url, Some(token))
}

fn harness(service_url: &str, seed_token: Option<&str>) -> TestHarness {
    let dir = TempDir::new().expect("tempdir");
    let token_path = dir.path().join("token");
    if let Some(token) = seed_token {
        std::fs::write(&token_path, token).expect("seed token file");
    }

    let config = ClientConfig {
        service: ServiceConfig {
            base_url: service_url.to_string(),
            timeout_in_ms: 5000,
        },
        storage: StorageConfig {
            enabled: true,
            backend: Some(StorageBackend::File(FileStorageConfig {
                path: token_path.to_string_lossy().into_owned(),
            })),
        },
        logging: LoggingConfig {
            level: "debug".to_string(),
            format: "console".to_string(),
        },
    };
    lexgate::utils::init_logging(&config.logging);

    TestHarness {
        context: AppContext::new(config),
        token_path,
        _dir: dir,
    }
}

pub const PROFILE_BODY: &str = r#"{
    "id": 1,
    "email": "alice@example.com",
    "username": "alice",
    "full_name": "Alice Example",
    "is_active": true
}"#;
