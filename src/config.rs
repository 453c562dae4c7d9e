//! Runtime configuration
//!
//! The miner is configured from a small YAML document (or built in code):
//! script-application credentials, the application identifier sent as the
//! user agent, and the endpoints to talk to. Endpoint fields default to the
//! production API and exist mainly so tests can point at a local server.
//!
//! ```yaml
//! credentials:
//!   client_id: "..."
//!   client_secret: "..."
//!   username: "..."
//!   password: "..."
//! user_agent: "my-moderation-tool/1.0"
//! ```

use crate::auth::Credentials;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Reddit's production OAuth API base URL
pub const DEFAULT_API_BASE_URL: &str = "https://oauth.reddit.com";

/// Complete miner configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MinerConfig {
    /// Script application credentials
    pub credentials: Credentials,

    /// Application identifier sent as the user agent
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Base URL for authenticated API requests
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// Token endpoint URL
    #[serde(default = "default_token_url")]
    pub token_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_user_agent() -> String {
    format!("modmine/{}", env!("CARGO_PKG_VERSION"))
}

fn default_api_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

fn default_token_url() -> String {
    crate::auth::DEFAULT_TOKEN_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

impl MinerConfig {
    /// Create a configuration with default endpoints
    pub fn new(credentials: Credentials, user_agent: impl Into<String>) -> Self {
        Self {
            credentials,
            user_agent: user_agent.into(),
            api_base_url: default_api_base_url(),
            token_url: default_token_url(),
            timeout_secs: default_timeout_secs(),
        }
    }

    /// Load a configuration from a YAML file
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            Error::config(format!(
                "cannot read config file '{}': {e}",
                path.as_ref().display()
            ))
        })?;
        Self::from_yaml_str(&contents)
    }

    /// Parse a configuration from a YAML string
    pub fn from_yaml_str(contents: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate field contents
    pub fn validate(&self) -> Result<()> {
        if self.credentials.client_id.is_empty() {
            return Err(Error::config("credentials.client_id must not be empty"));
        }
        if self.credentials.client_secret.is_empty() {
            return Err(Error::config("credentials.client_secret must not be empty"));
        }
        if self.credentials.username.is_empty() {
            return Err(Error::config("credentials.username must not be empty"));
        }
        if self.credentials.password.is_empty() {
            return Err(Error::config("credentials.password must not be empty"));
        }
        if self.user_agent.is_empty() {
            return Err(Error::config("user_agent must not be empty"));
        }

        url::Url::parse(&self.api_base_url)?;
        url::Url::parse(&self.token_url)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn minimal_yaml() -> &'static str {
        r#"
credentials:
  client_id: app-id
  client_secret: app-secret
  username: miner
  password: hunter2
"#
    }

    #[test]
    fn test_parse_minimal_yaml_applies_defaults() {
        let config = MinerConfig::from_yaml_str(minimal_yaml()).unwrap();

        assert_eq!(config.credentials.username, "miner");
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
        assert_eq!(config.token_url, crate::auth::DEFAULT_TOKEN_URL);
        assert_eq!(config.timeout_secs, 30);
        assert!(config.user_agent.starts_with("modmine/"));
    }

    #[test]
    fn test_parse_full_yaml() {
        let yaml = r#"
credentials:
  client_id: app-id
  client_secret: app-secret
  username: miner
  password: hunter2
user_agent: "my-moderation-tool/1.0"
api_base_url: "http://localhost:8080"
token_url: "http://localhost:8080/api/v1/access_token"
timeout_secs: 5
"#;
        let config = MinerConfig::from_yaml_str(yaml).unwrap();

        assert_eq!(config.user_agent, "my-moderation-tool/1.0");
        assert_eq!(config.api_base_url, "http://localhost:8080");
        assert_eq!(config.timeout_secs, 5);
    }

    #[test]
    fn test_invalid_yaml_is_rejected() {
        let result = MinerConfig::from_yaml_str("credentials: [not, a, map]");
        assert!(result.is_err());
    }

    #[test]
    fn test_empty_username_is_rejected() {
        let yaml = r#"
credentials:
  client_id: app-id
  client_secret: app-secret
  username: ""
  password: hunter2
"#;
        let err = MinerConfig::from_yaml_str(yaml).unwrap_err();
        assert!(err.to_string().contains("username"));
    }

    #[test]
    fn test_malformed_base_url_is_rejected() {
        let yaml = r#"
credentials:
  client_id: app-id
  client_secret: app-secret
  username: miner
  password: hunter2
api_base_url: "not a url"
"#;
        let result = MinerConfig::from_yaml_str(yaml);
        assert!(matches!(result, Err(Error::InvalidUrl(_))));
    }

    #[test]
    fn test_missing_config_file() {
        let result = MinerConfig::from_yaml_file("/nonexistent/modmine.yaml");
        assert!(matches!(result, Err(Error::Config { .. })));
    }
}
