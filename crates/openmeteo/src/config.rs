//! Open-Meteo client configuration

use serde::{Deserialize, Serialize};

/// Public Open-Meteo origin, used when no base URL is configured
pub const DEFAULT_BASE_URL: &str = "https://api.open-meteo.com";

/// Open-Meteo client configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpenMeteoConfig {
    /// Service origin without path (default: <https://api.open-meteo.com>).
    /// An empty string selects the default.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds (default: 5)
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

const fn default_timeout_secs() -> u64 {
    5
}

impl Default for OpenMeteoConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl OpenMeteoConfig {
    /// Configuration pointing at the given host; an empty host keeps the default origin
    #[must_use]
    pub fn with_host(host: &str) -> Self {
        let mut config = Self::default();
        if !host.is_empty() {
            config.base_url = host.to_string();
        }
        config
    }

    /// Create a configuration suitable for testing
    #[must_use]
    pub fn for_testing() -> Self {
        Self {
            timeout_secs: 2,
            ..Default::default()
        }
    }

    /// Base URL with the default applied and any trailing slash removed
    #[must_use]
    pub fn resolved_base_url(&self) -> &str {
        let base = self.base_url.trim_end_matches('/');
        if base.is_empty() {
            DEFAULT_BASE_URL
        } else {
            base
        }
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.timeout_secs == 0 {
            return Err("timeout_secs must be greater than 0".to_string());
        }
        if !self.base_url.is_empty()
            && !self.base_url.starts_with("http://")
            && !self.base_url.starts_with("https://")
        {
            return Err("base_url must start with http:// or https://".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = OpenMeteoConfig::default();
        assert_eq!(config.base_url, "https://api.open-meteo.com");
        assert_eq!(config.timeout_secs, 5);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_with_host_empty_keeps_default() {
        let config = OpenMeteoConfig::with_host("");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_with_host_overrides() {
        let config = OpenMeteoConfig::with_host("http://127.0.0.1:8080");
        assert_eq!(config.base_url, "http://127.0.0.1:8080");
        assert_eq!(config.timeout_secs, 5);
    }

    #[test]
    fn test_resolved_base_url() {
        let mut config = OpenMeteoConfig::default();
        assert_eq!(config.resolved_base_url(), DEFAULT_BASE_URL);

        config.base_url = "http://localhost:9000/".to_string();
        assert_eq!(config.resolved_base_url(), "http://localhost:9000");

        config.base_url = String::new();
        assert_eq!(config.resolved_base_url(), DEFAULT_BASE_URL);
    }

    #[test]
    fn test_validate_rejects_zero_timeout() {
        let config = OpenMeteoConfig {
            timeout_secs: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_bad_scheme() {
        let config = OpenMeteoConfig {
            base_url: "ftp://api.open-meteo.com".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = OpenMeteoConfig {
            base_url: String::new(),
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_deserialize_partial() {
        let config: OpenMeteoConfig =
            serde_json::from_str(r#"{"base_url": "http://localhost:1234"}"#)
                .expect("should deserialize");
        assert_eq!(config.base_url, "http://localhost:1234");
        assert_eq!(config.timeout_secs, 5);

        let config: OpenMeteoConfig = serde_json::from_str("{}").expect("should deserialize");
        assert_eq!(config, OpenMeteoConfig::default());
    }
}
