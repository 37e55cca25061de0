//! Runtime configuration shared by the desktop app and the CLI.

use std::path::PathBuf;
use std::time::Duration;

/// Public Rick and Morty GraphQL endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://rickandmortyapi.com/graphql";

/// Per-request timeout for GraphQL calls.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// File name of the key-value database inside the data directory.
pub const DATABASE_FILE: &str = "catalog.redb";

/// Application configuration.
///
/// The endpoint is operator configuration (binary flags), never something the
/// user edits from the UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    pub endpoint: String,
    pub request_timeout: Duration,
    pub data_dir: PathBuf,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            data_dir: default_data_dir(None),
        }
    }
}

impl CatalogConfig {
    pub fn with_data_dir(mut self, data_dir: impl Into<PathBuf>) -> Self {
        self.data_dir = data_dir.into();
        self
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Path of the redb file holding the persisted profile.
    pub fn database_path(&self) -> PathBuf {
        self.data_dir.join(DATABASE_FILE)
    }
}

/// Platform data directory for the catalog, optionally suffixed by an
/// instance name (`catalog-<name>`).
pub fn default_data_dir(instance: Option<&str>) -> PathBuf {
    let base = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
    match instance {
        Some(name) => base.join(format!("catalog-{}", name)),
        None => base.join("catalog"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_endpoint() {
        let config = CatalogConfig::default();
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.request_timeout, Duration::from_secs(10));
    }

    #[test]
    fn test_database_path_inside_data_dir() {
        let config = CatalogConfig::default().with_data_dir("/tmp/catalog-test");
        assert_eq!(
            config.database_path(),
            PathBuf::from("/tmp/catalog-test").join(DATABASE_FILE)
        );
    }

    #[test]
    fn test_named_instance_dir() {
        let dir = default_data_dir(Some("second"));
        assert!(dir.ends_with("catalog-second"));
    }
}
