use std::fmt;
use std::sync::Arc;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use graphid_core::{GraphError, GraphResult};
use serde::Deserialize;
use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::cloud::NationalCloud;

/// Tokens are refreshed this long before they expire.
const EXPIRY_MARGIN: Duration = Duration::from_secs(60);

/// Supplies bearer tokens to the HTTP adapter.
#[async_trait]
pub trait AccessTokenProvider: Send + Sync {
    async fn get_token(&self) -> GraphResult<String>;
}

/// A pre-acquired token, e.g. from `az account get-access-token`.
#[derive(Clone)]
pub struct StaticTokenProvider {
    token: String,
}

impl StaticTokenProvider {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }
}

impl fmt::Debug for StaticTokenProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("StaticTokenProvider(..)")
    }
}

#[async_trait]
impl AccessTokenProvider for StaticTokenProvider {
    async fn get_token(&self) -> GraphResult<String> {
        Ok(self.token.clone())
    }
}

#[derive(Clone)]
pub struct ClientCredentials {
    pub tenant_id: String,
    pub client_id: String,
    pub client_secret: String,
    pub cloud: NationalCloud,
}

impl fmt::Debug for ClientCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientCredentials")
            .field("tenant_id", &self.tenant_id)
            .field("client_id", &self.client_id)
            .field("cloud", &self.cloud)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    expires_in: u64,
}

#[derive(Debug, Deserialize)]
struct TokenErrorResponse {
    error: String,
    error_description: Option<String>,
}

#[derive(Debug, Clone)]
struct CachedToken {
    access_token: String,
    expires_at: Instant,
}

/// OAuth2 client-credentials grant against the Microsoft identity platform,
/// with an in-memory token cache.
#[derive(Clone)]
pub struct ClientCredentialsProvider {
    credentials: ClientCredentials,
    authority: String,
    scope: String,
    http: reqwest::Client,
    cache: Arc<RwLock<Option<CachedToken>>>,
}

impl ClientCredentialsProvider {
    pub fn new(credentials: ClientCredentials) -> Self {
        let authority = credentials.cloud.authority().to_string();
        let scope = credentials.cloud.default_scope();
        Self {
            credentials,
            authority,
            scope,
            http: reqwest::Client::new(),
            cache: Arc::new(RwLock::new(None)),
        }
    }

    /// Override the login authority, e.g. for a proxy or a test server.
    pub fn with_authority(mut self, authority: impl Into<String>) -> Self {
        self.authority = authority.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_scope(mut self, scope: impl Into<String>) -> Self {
        self.scope = scope.into();
        self
    }

    fn token_url(&self) -> String {
        format!(
            "{}/{}/oauth2/v2.0/token",
            self.authority, self.credentials.tenant_id
        )
    }

    async fn cached(&self) -> Option<String> {
        let cache = self.cache.read().await;
        cache
            .as_ref()
            .filter(|cached| cached.expires_at > Instant::now() + EXPIRY_MARGIN)
            .map(|cached| cached.access_token.clone())
    }

    async fn fetch(&self) -> GraphResult<CachedToken> {
        let url = self.token_url();
        let resp = self
            .http
            .post(&url)
            .form(&[
                ("client_id", self.credentials.client_id.as_str()),
                ("client_secret", self.credentials.client_secret.as_str()),
                ("scope", self.scope.as_str()),
                ("grant_type", "client_credentials"),
            ])
            .send()
            .await
            .map_err(|e| GraphError::Auth(format!("token request failed: {e}")))?;

        let status = resp.status();
        let body = resp
            .bytes()
            .await
            .map_err(|e| GraphError::Auth(format!("failed to read token response: {e}")))?;

        if !status.is_success() {
            let reason = match serde_json::from_slice::<TokenErrorResponse>(&body) {
                Ok(err) => match err.error_description {
                    Some(description) => format!("{}: {description}", err.error),
                    None => err.error,
                },
                Err(_) => String::from_utf8_lossy(&body).into_owned(),
            };
            return Err(GraphError::Auth(format!(
                "token request failed ({status}): {reason}"
            )));
        }

        let token: TokenResponse = serde_json::from_slice(&body)
            .map_err(|e| GraphError::Auth(format!("failed to parse token response: {e}")))?;
        Ok(CachedToken {
            access_token: token.access_token,
            expires_at: Instant::now() + Duration::from_secs(token.expires_in),
        })
    }
}

#[async_trait]
impl AccessTokenProvider for ClientCredentialsProvider {
    async fn get_token(&self) -> GraphResult<String> {
        if let Some(token) = self.cached().await {
            debug!("using cached access token");
            return Ok(token);
        }

        let mut cache = self.cache.write().await;
        // Another task may have refreshed while we waited for the lock.
        if let Some(cached) = cache.as_ref()
            && cached.expires_at > Instant::now() + EXPIRY_MARGIN
        {
            return Ok(cached.access_token.clone());
        }

        let fresh = self.fetch().await?;
        info!(tenant = %self.credentials.tenant_id, "acquired access token");
        let token = fresh.access_token.clone();
        *cache = Some(fresh);
        Ok(token)
    }
}
