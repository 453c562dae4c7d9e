//! Session client implementation

use crate::auth::Authenticator;
use crate::config::MinerConfig;
use crate::error::Result;
use crate::http::{HttpClient, HttpClientConfig, RequestConfig};
use crate::miner::ApiGateway;
use crate::types::JsonValue;
use async_trait::async_trait;
use serde::Deserialize;
use std::collections::HashMap;
use std::time::Duration;
use tracing::info;

/// The authenticated account identity
#[derive(Debug, Clone, Deserialize)]
pub struct Identity {
    /// Account username
    pub name: String,
}

/// Authenticated session client for the Reddit API
pub struct RedditClient {
    http: HttpClient,
}

impl RedditClient {
    /// Establish an authenticated session
    ///
    /// Fetches an access token and resolves the account identity up front,
    /// so bad credentials fail here rather than on the first mining request.
    /// Logs the identity on success.
    pub async fn connect(config: &MinerConfig) -> Result<Self> {
        config.validate()?;

        let token_client = reqwest::Client::builder()
            .user_agent(&config.user_agent)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .expect("Failed to build HTTP client");

        let authenticator = Authenticator::with_client(
            config.credentials.clone(),
            config.token_url.clone(),
            token_client,
        );

        let http_config = HttpClientConfig::builder()
            .base_url(config.api_base_url.as_str())
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.as_str())
            .build();

        let client = Self {
            http: HttpClient::with_auth(http_config, authenticator),
        };

        let identity = client.me().await?;
        info!("Logged in as user {}", identity.name);

        Ok(client)
    }

    /// Fetch the authenticated account identity
    pub async fn me(&self) -> Result<Identity> {
        self.http.get_json("/api/v1/me").await
    }
}

#[async_trait]
impl ApiGateway for RedditClient {
    async fn get(&self, path: &str, query: &HashMap<String, String>) -> Result<JsonValue> {
        self.http
            .get_json_with_config(path, RequestConfig::new().query_map(query))
            .await
    }
}

impl std::fmt::Debug for RedditClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RedditClient")
            .field("http", &self.http)
            .finish()
    }
}
