//! Authenticator implementation
//!
//! Handles fetching access tokens for a script application and applying
//! them to requests.

use super::types::{CachedToken, Credentials};
use crate::error::{Error, Result};
use reqwest::{Client, RequestBuilder};
use serde::Deserialize;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

/// Reddit's production token endpoint
pub const DEFAULT_TOKEN_URL: &str = "https://www.reddit.com/api/v1/access_token";

/// Response body from the token endpoint
#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: Option<String>,
    expires_in: Option<i64>,
    error: Option<String>,
}

/// Authenticator handles fetching and applying bearer tokens
pub struct Authenticator {
    /// Script application credentials
    credentials: Credentials,
    /// Token endpoint URL
    token_url: String,
    /// Cached token with expiry
    cached_token: Arc<RwLock<Option<CachedToken>>>,
    /// HTTP client for token requests
    http_client: Client,
}

impl Authenticator {
    /// Create a new authenticator against the production token endpoint
    pub fn new(credentials: Credentials, user_agent: &str) -> Self {
        let http_client = Client::builder()
            .user_agent(user_agent)
            .build()
            .expect("Failed to build HTTP client");

        Self {
            credentials,
            token_url: DEFAULT_TOKEN_URL.to_string(),
            cached_token: Arc::new(RwLock::new(None)),
            http_client,
        }
    }

    /// Create an authenticator with a custom token endpoint and HTTP client
    pub fn with_client(credentials: Credentials, token_url: String, http_client: Client) -> Self {
        Self {
            credentials,
            token_url,
            cached_token: Arc::new(RwLock::new(None)),
            http_client,
        }
    }

    /// Apply authentication to a request builder
    pub async fn apply(&self, req: RequestBuilder) -> Result<RequestBuilder> {
        let token = self.access_token().await?;
        Ok(req.bearer_auth(token))
    }

    /// Get a valid access token, fetching or refreshing if necessary
    pub async fn access_token(&self) -> Result<String> {
        // Check if we have a valid cached token
        {
            let cached = self.cached_token.read().await;
            if let Some(token) = cached.as_ref() {
                if !token.is_expired() {
                    return Ok(token.token.clone());
                }
            }
        }

        // Need to refresh - acquire write lock
        let mut cached = self.cached_token.write().await;

        // Double-check after acquiring write lock (another task might have refreshed)
        if let Some(token) = cached.as_ref() {
            if !token.is_expired() {
                return Ok(token.token.clone());
            }
        }

        let new_token = self.fetch_new_token().await?;
        let token_str = new_token.token.clone();
        *cached = Some(new_token);

        Ok(token_str)
    }

    /// Fetch a new token using the password grant
    async fn fetch_new_token(&self) -> Result<CachedToken> {
        debug!("Fetching access token from {}", self.token_url);

        let form = [
            ("grant_type", "password"),
            ("username", self.credentials.username.as_str()),
            ("password", self.credentials.password.as_str()),
        ];

        let response = self
            .http_client
            .post(&self.token_url)
            .basic_auth(
                &self.credentials.client_id,
                Some(&self.credentials.client_secret),
            )
            .form(&form)
            .send()
            .await
            .map_err(|e| Error::auth(format!("token request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::auth(format!(
                "token endpoint returned HTTP {}",
                status.as_u16()
            )));
        }

        // The token endpoint reports bad credentials with a 200 and an
        // "error" field in the body.
        let body: TokenResponse = response
            .json()
            .await
            .map_err(|e| Error::auth(format!("invalid token response: {e}")))?;

        if let Some(error) = body.error {
            return Err(Error::auth(format!(
                "token endpoint rejected credentials: {error}"
            )));
        }

        let token = body
            .access_token
            .ok_or_else(|| Error::auth("token response missing access_token"))?;

        Ok(match body.expires_in {
            Some(seconds) => CachedToken::expires_in(token, seconds),
            None => CachedToken::new(token, None),
        })
    }
}

impl std::fmt::Debug for Authenticator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Authenticator")
            .field("username", &self.credentials.username)
            .field("token_url", &self.token_url)
            .finish_non_exhaustive()
    }
}
