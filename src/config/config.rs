use figment::providers::{Env, Format, Yaml};
use figment::Figment;
use schemars::{schema_for, JsonSchema};
use serde::{Deserialize, Serialize};

use super::logging::LoggingConfig;
use super::storage::StorageConfig;

/// A top-level enum for versioned configurations.
#[derive(Deserialize, Serialize, JsonSchema)]
#[serde(tag = "version")]
pub enum Config {
    #[serde(rename = "1.0.0")]
    ConfigV1(ClientConfig),
}

/// Main config for v1.0.0: where the authentication service lives, where the
/// token is persisted, how we log.
#[derive(Deserialize, Serialize, Debug, JsonSchema)]
pub struct ClientConfig {
    pub service: ServiceConfig,
    pub storage: StorageConfig,
    pub logging: LoggingConfig,
}

/// The authentication service endpoint.
#[derive(Deserialize, Serialize, Debug, JsonSchema)]
pub struct ServiceConfig {
    pub base_url: String,
    pub timeout_in_ms: u64,
}

/// Load config from a YAML file named "config.yaml" in the current
/// directory, with `LEXGATE_*` environment variables taking precedence.
pub fn load_config() -> ClientConfig {
    match load_config_from("./config.yaml") {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Error loading configuration: {}", e);
            std::process::exit(1);
        }
    }
}

/// Load config from a specific YAML file, with `LEXGATE_*` environment
/// variables taking precedence.
pub fn load_config_from(path: &str) -> Result<ClientConfig, figment::Error> {
    let figment = Figment::new()
        .merge(Yaml::file(path))
        .merge(Env::prefixed("LEXGATE_").split("__"));
    let config = figment.extract::<Config>()?;
    match config {
        Config::ConfigV1(c) => Ok(c),
    }
}

/// Print the JSON schema for the configuration to stdout.
pub fn print_schema() {
    let schema = schema_for!(Config);
    println!("{}", serde_json::to_string_pretty(&schema).unwrap());
}
