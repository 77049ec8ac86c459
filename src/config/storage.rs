use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A wrapper for the token storage configuration:
/// - enabled: if false, the token only lives in memory.
/// - backend: the actual storage backend (file, etc.).
#[derive(Deserialize, Serialize, Debug, JsonSchema)]
pub struct StorageConfig {
    pub enabled: bool,
    #[serde(flatten)]
    pub backend: Option<StorageBackend>,
}

/// The available storage backends, differentiated via a "type" tag in YAML.
#[derive(Deserialize, Serialize, Debug, JsonSchema)]
#[serde(tag = "type")]
pub enum StorageBackend {
    #[serde(rename = "file")]
    File(FileStorageConfig),
}

/// Config for the file-backed token storage.
#[derive(Deserialize, Serialize, Debug, JsonSchema)]
pub struct FileStorageConfig {
    pub path: String,
}
