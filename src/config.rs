use std::path::PathBuf;

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Store configuration
#[derive(Debug, Deserialize, Clone)]
pub struct StoreConfig {
    /// Which storage backend to use
    #[serde(default)]
    pub backend: BackendKind,
    /// Path of the JSON document used by the file backend
    #[serde(default = "default_storage_path")]
    pub storage_path: PathBuf,
    /// Seed the built-in sample recipes when the store is empty on first read
    #[serde(default = "default_seed_on_empty")]
    pub seed_on_empty: bool,
}

/// Available storage backends
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum BackendKind {
    /// Single JSON file on disk
    #[default]
    File,
    /// In-process only, nothing survives the session
    Memory,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            backend: BackendKind::default(),
            storage_path: default_storage_path(),
            seed_on_empty: default_seed_on_empty(),
        }
    }
}

fn default_storage_path() -> PathBuf {
    PathBuf::from("openrecipe_recipes.json")
}

fn default_seed_on_empty() -> bool {
    true
}

impl StoreConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with OPENRECIPE__ prefix
    /// 2. openrecipe.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: OPENRECIPE__STORAGE_PATH
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            // Optional config file (can be missing)
            .add_source(File::with_name("openrecipe").required(false))
            .add_source(
                Environment::with_prefix("OPENRECIPE")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let config = StoreConfig::default();
        assert_eq!(config.backend, BackendKind::File);
        assert_eq!(
            config.storage_path,
            PathBuf::from("openrecipe_recipes.json")
        );
        assert!(config.seed_on_empty);
    }

    #[test]
    fn test_backend_kind_deserializes_lowercase() {
        let config: StoreConfig =
            serde_json::from_str(r#"{"backend":"memory","seed_on_empty":false}"#).unwrap();
        assert_eq!(config.backend, BackendKind::Memory);
        assert!(!config.seed_on_empty);
    }
}
