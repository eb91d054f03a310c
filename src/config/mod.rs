#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::core::ApiClient;
use crate::utils::error::Result;
use crate::utils::validation::{validate_url, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;
use toml_config::ConfigFile;

/// The backend's development address, API prefix included.
pub const DEFAULT_BASE_URL: &str = "http://localhost:5001/api";
pub const BASE_URL_ENV: &str = "CORNERSTONE_BASE_URL";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    pub base_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl ClientConfig {
    /// Layers the config file (if any), then `CORNERSTONE_BASE_URL`, over the
    /// defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };

        if let Ok(base_url) = std::env::var(BASE_URL_ENV) {
            if !base_url.trim().is_empty() {
                tracing::debug!("Using {} from environment", BASE_URL_ENV);
                config.base_url = base_url;
            }
        }

        Ok(config)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Ok(ConfigFile::from_file(path)?.into())
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Validates the config and builds a client for it.
    pub fn build_client(&self) -> Result<ApiClient> {
        self.validate()?;
        ApiClient::new(&self.base_url)
    }
}

impl From<ConfigFile> for ClientConfig {
    fn from(file: ConfigFile) -> Self {
        let defaults = Self::default();
        Self {
            base_url: file.client.base_url.unwrap_or(defaults.base_url),
        }
    }
}

impl Validate for ClientConfig {
    fn validate(&self) -> Result<()> {
        validate_url("base_url", &self.base_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::ClientError;
    use tempfile::TempDir;

    #[test]
    fn test_default_points_at_local_backend() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "http://localhost:5001/api");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("cornerstone.toml");
        std::fs::write(&path, "[client]\nbase_url = \"https://cornerstone.example.com/api\"\n")
            .unwrap();

        let config = ClientConfig::from_file(&path).unwrap();
        assert_eq!(config.base_url, "https://cornerstone.example.com/api");
    }

    #[test]
    fn test_file_without_base_url_keeps_default() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("cornerstone.toml");
        std::fs::write(&path, "[client]\n").unwrap();

        let config = ClientConfig::from_file(&path).unwrap();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = ClientConfig::from_file("/definitely/not/here.toml").unwrap_err();
        assert!(matches!(err, ClientError::Io(_)));
    }

    #[test]
    fn test_build_client_rejects_bad_scheme() {
        let config = ClientConfig::default().with_base_url("ftp://example.com/api");
        let err = config.build_client().unwrap_err();
        assert!(matches!(err, ClientError::InvalidConfigValue { .. }));
    }

    #[test]
    fn test_build_client_keeps_base_url() {
        let client = ClientConfig::default().build_client().unwrap();
        assert_eq!(client.base_url().as_str(), "http://localhost:5001/api");
    }
}
