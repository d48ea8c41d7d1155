//! Configuration management

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{info, warn};

const DEFAULT_REGION: &str = "us-east-1";

/// Configuration for the translate client
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Full service URL; derived from `region` when unset
    pub endpoint: Option<String>,
    pub region: String,
    pub timeout_ms: u64,
    pub connect_timeout_ms: u64,
    pub user_agent: String,
    /// Check requests against the service constraints before sending
    pub client_side_validation: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            region: DEFAULT_REGION.to_string(),
            timeout_ms: 30000,
            connect_timeout_ms: 5000,
            user_agent: format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION")),
            client_side_validation: true,
        }
    }
}

impl ClientConfig {
    /// Load configuration from the environment only
    pub fn from_env() -> anyhow::Result<Self> {
        Self::load(None)
    }

    /// Layer defaults, an optional config file and `TRANSLATE_*` variables.
    ///
    /// `AWS_REGION` seeds the region; `TRANSLATE_REGION` overrides it.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let defaults = Self::default();
        let region = std::env::var("AWS_REGION").unwrap_or(defaults.region);

        let mut builder = config::Config::builder()
            .set_default("region", region)?
            .set_default("timeout_ms", defaults.timeout_ms)?
            .set_default("connect_timeout_ms", defaults.connect_timeout_ms)?
            .set_default("user_agent", defaults.user_agent)?
            .set_default("client_side_validation", defaults.client_side_validation)?;

        if let Some(path) = path {
            if !path.exists() {
                return Err(anyhow::anyhow!(
                    "config file not found: {}",
                    path.display()
                ));
            }
            builder = builder.add_source(config::File::from(path));
        }

        let config: Self = builder
            .add_source(config::Environment::with_prefix("TRANSLATE"))
            .build()?
            .try_deserialize()?;

        info!(
            "Loaded client config for region {} ({})",
            config.region,
            config.endpoint_url()
        );
        Ok(config)
    }

    /// Load from JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> anyhow::Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.region.trim().is_empty() && self.endpoint.is_none() {
            return Err(anyhow::anyhow!("region or endpoint is required"));
        }

        if let Some(endpoint) = &self.endpoint {
            if !(endpoint.starts_with("http://") || endpoint.starts_with("https://")) {
                return Err(anyhow::anyhow!(
                    "endpoint must be an http(s) URL: {}",
                    endpoint
                ));
            }
            if endpoint.starts_with("http://") {
                warn!("Using plaintext endpoint {}", endpoint);
            }
        }

        if self.timeout_ms == 0 {
            return Err(anyhow::anyhow!("timeout_ms must be greater than 0"));
        }

        if !self.client_side_validation {
            warn!("Client-side request validation is disabled");
        }

        Ok(())
    }

    /// URL every operation is posted to
    pub fn endpoint_url(&self) -> String {
        match &self.endpoint {
            Some(endpoint) => endpoint.trim_end_matches('/').to_string(),
            None => format!("https://translate.{}.amazonaws.com", self.region),
        }
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = region.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_config_validation() {
        let config = ClientConfig::default().with_endpoint("https://translate.local");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation_bad_endpoint() {
        let config = ClientConfig {
            endpoint: Some("translate.local".to_string()),
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = ClientConfig {
            timeout_ms: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_endpoint_from_region() {
        let config = ClientConfig::default().with_region("eu-central-1");
        assert_eq!(
            config.endpoint_url(),
            "https://translate.eu-central-1.amazonaws.com"
        );

        let config = config.with_endpoint("http://127.0.0.1:4566/");
        assert_eq!(config.endpoint_url(), "http://127.0.0.1:4566");
    }

    #[test]
    fn test_load_layers_file_and_env() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(
            file,
            r#"{{"endpoint": "http://localhost:9000", "timeout_ms": 1500}}"#
        )
        .unwrap();

        std::env::set_var("TRANSLATE_CONNECT_TIMEOUT_MS", "250");
        let config = ClientConfig::load(Some(file.path())).unwrap();
        std::env::remove_var("TRANSLATE_CONNECT_TIMEOUT_MS");

        assert_eq!(config.endpoint.as_deref(), Some("http://localhost:9000"));
        assert_eq!(config.timeout_ms, 1500);
        assert_eq!(config.connect_timeout_ms, 250);
        assert!(config.client_side_validation);
    }

    #[test]
    fn test_load_missing_file() {
        let err = ClientConfig::load(Some(Path::new("/nonexistent/translate.json")));
        assert!(err.is_err());
    }

    #[test]
    fn test_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("client.json");
        let config = ClientConfig::default()
            .with_region("ap-northeast-1")
            .with_endpoint("https://translate.example.test");
        config.to_file(&path).unwrap();
        assert_eq!(ClientConfig::from_file(&path).unwrap(), config);
    }
}
