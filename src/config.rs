//! Configuration for the upload collector
//!
//! Values come from YAML, then environment overrides, then CLI flags.
//! The collector itself never reads the environment.

use crate::error::{Error, Result, ResultExt};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use url::Url;

/// Default Irys GraphQL endpoint (devnet)
pub const DEFAULT_ENDPOINT: &str = "https://arweave.devnet.irys.xyz/graphql";

/// Default public gateway prefix for retrieval URLs
pub const DEFAULT_GATEWAY_BASE: &str = "https://gateway.irys.xyz/";

/// Items requested per page
pub const DEFAULT_PAGE_SIZE: u32 = 100;

/// Hard ceiling on page fetches per collection run
pub const DEFAULT_MAX_ITERATIONS: u32 = 200;

/// Environment variable overriding the endpoint
pub const ENDPOINT_ENV: &str = "IRYS_GRAPHQL_ENDPOINT";

/// Environment variable overriding the gateway prefix
pub const GATEWAY_ENV: &str = "IRYS_GATEWAY_BASE";

/// Collector and remote service configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectorConfig {
    /// GraphQL endpoint of the remote index
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Prefix prepended to item ids to form retrieval URLs
    #[serde(default = "default_gateway_base")]
    pub gateway_base: String,

    /// Items requested per page
    #[serde(default = "default_page_size")]
    pub page_size: u32,

    /// Maximum number of pages fetched in one run
    #[serde(default = "default_max_iterations")]
    pub max_iterations: u32,

    /// Treat a page shorter than `page_size` as the end of the list
    #[serde(default = "default_true")]
    pub stop_on_short_page: bool,

    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Optional client-side rate limit
    #[serde(default)]
    pub requests_per_second: Option<u32>,
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_gateway_base() -> String {
    DEFAULT_GATEWAY_BASE.to_string()
}

fn default_page_size() -> u32 {
    DEFAULT_PAGE_SIZE
}

fn default_max_iterations() -> u32 {
    DEFAULT_MAX_ITERATIONS
}

fn default_true() -> bool {
    true
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for CollectorConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            gateway_base: default_gateway_base(),
            page_size: DEFAULT_PAGE_SIZE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            stop_on_short_page: true,
            timeout_secs: default_timeout_secs(),
            requests_per_second: None,
        }
    }
}

impl CollectorConfig {
    /// Parse config from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        Ok(config)
    }

    /// Load config from a YAML file
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(Error::FileNotFound {
                path: path.display().to_string(),
            });
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::from_yaml_str(&content).with_context(|| format!("Invalid config {}", path.display()))
    }

    /// Apply `IRYS_GRAPHQL_ENDPOINT` / `IRYS_GATEWAY_BASE` from the process environment
    #[must_use]
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides_from(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary lookup (empty values are ignored)
    #[must_use]
    pub fn with_overrides_from<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(endpoint) = lookup(ENDPOINT_ENV).filter(|v| !v.trim().is_empty()) {
            self.endpoint = endpoint.trim().to_string();
        }
        if let Some(base) = lookup(GATEWAY_ENV).filter(|v| !v.trim().is_empty()) {
            self.gateway_base = base.trim().to_string();
        }
        self
    }

    /// Per-request timeout
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Check that the config can drive a collection run
    pub fn validate(&self) -> Result<()> {
        if self.page_size == 0 {
            return Err(Error::invalid_value("page_size", "must be greater than 0"));
        }
        if self.max_iterations == 0 {
            return Err(Error::invalid_value(
                "max_iterations",
                "must be greater than 0",
            ));
        }
        if self.timeout_secs == 0 {
            return Err(Error::invalid_value("timeout_secs", "must be greater than 0"));
        }
        if self.requests_per_second == Some(0) {
            return Err(Error::invalid_value(
                "requests_per_second",
                "must be greater than 0",
            ));
        }
        if self.gateway_base.trim().is_empty() {
            return Err(Error::missing_field("gateway_base"));
        }

        let endpoint = Url::parse(&self.endpoint)?;
        if !matches!(endpoint.scheme(), "http" | "https") {
            return Err(Error::invalid_value(
                "endpoint",
                format!("unsupported scheme '{}'", endpoint.scheme()),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = CollectorConfig::default();
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.gateway_base, DEFAULT_GATEWAY_BASE);
        assert_eq!(config.page_size, 100);
        assert_eq!(config.max_iterations, 200);
        assert!(config.stop_on_short_page);
        assert_eq!(config.timeout(), Duration::from_secs(30));
        assert!(config.requests_per_second.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_yaml_partial() {
        let yaml = r"
endpoint: https://node1.irys.xyz/graphql
page_size: 50
requests_per_second: 5
";
        let config = CollectorConfig::from_yaml_str(yaml).unwrap();
        assert_eq!(config.endpoint, "https://node1.irys.xyz/graphql");
        assert_eq!(config.page_size, 50);
        assert_eq!(config.requests_per_second, Some(5));
        assert_eq!(config.max_iterations, DEFAULT_MAX_ITERATIONS);
        assert_eq!(config.gateway_base, DEFAULT_GATEWAY_BASE);
    }

    #[test]
    fn test_from_yaml_empty_mapping_uses_defaults() {
        let config = CollectorConfig::from_yaml_str("{}").unwrap();
        assert_eq!(config, CollectorConfig::default());
    }

    #[test]
    fn test_from_yaml_invalid() {
        let result = CollectorConfig::from_yaml_str("page_size: [not, a, number]");
        assert!(matches!(result, Err(Error::YamlParse(_))));
    }

    #[test]
    fn test_from_yaml_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "max_iterations: 3\nstop_on_short_page: false").unwrap();

        let config = CollectorConfig::from_yaml_file(file.path()).unwrap();
        assert_eq!(config.max_iterations, 3);
        assert!(!config.stop_on_short_page);
    }

    #[test]
    fn test_from_yaml_file_invalid_names_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "page_size: [1, 2]").unwrap();

        let err = CollectorConfig::from_yaml_file(file.path()).unwrap_err();
        let message = err.to_string();
        assert!(matches!(err, Error::Other(_)));
        assert!(message.starts_with(&format!("Invalid config {}", file.path().display())));
        assert!(message.contains("Failed to parse YAML"));
    }

    #[test]
    fn test_from_yaml_file_missing() {
        let result = CollectorConfig::from_yaml_file("/nonexistent/irys.yaml");
        assert!(matches!(result, Err(Error::FileNotFound { .. })));
    }

    #[test]
    fn test_overrides_from_lookup() {
        let env: HashMap<&str, &str> = [
            (ENDPOINT_ENV, " http://localhost:9000/graphql "),
            (GATEWAY_ENV, ""),
        ]
        .into_iter()
        .collect();

        let config = CollectorConfig::default()
            .with_overrides_from(|key| env.get(key).map(ToString::to_string));
        assert_eq!(config.endpoint, "http://localhost:9000/graphql");
        assert_eq!(config.gateway_base, DEFAULT_GATEWAY_BASE);
    }

    #[test]
    fn test_validate_rejects_zero_bounds() {
        let config = CollectorConfig {
            page_size: 0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(Error::InvalidConfigValue { field, .. }) if field == "page_size"
        ));

        let config = CollectorConfig {
            max_iterations: 0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(Error::InvalidConfigValue { field, .. }) if field == "max_iterations"
        ));
    }

    #[test]
    fn test_validate_rejects_bad_endpoint() {
        let config = CollectorConfig {
            endpoint: "not a url".to_string(),
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(Error::InvalidUrl(_))));

        let config = CollectorConfig {
            endpoint: "ftp://example.com/graphql".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(Error::InvalidConfigValue { .. })
        ));
    }
}
