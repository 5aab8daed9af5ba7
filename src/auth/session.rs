use std::sync::Arc;

use anyhow::{anyhow, Context, Result};
use reqwest::Client;
use serde::Deserialize;
use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::auth::credentials::AuthCredentials;
use crate::auth::token::AuthToken;
use crate::resilience::retry::RetryPolicy;
use crate::utils::constants::AUTH_LOGIN_PATH;

#[derive(Debug, Deserialize)]
struct LoginResponse {
    token: String,
}

/// Cached login session against the cluster IAM endpoint.
///
/// Holds at most one token; re-authenticates when the cached token is
/// absent or inside the early-refresh margin. Clones share the cache.
#[derive(Debug, Clone)]
pub struct AuthSession {
    base_url: String,
    credentials: AuthCredentials,
    client: Client,
    retry: RetryPolicy,
    current: Arc<RwLock<Option<AuthToken>>>,
}

impl AuthSession {
    pub fn new(
        base_url: impl Into<String>,
        credentials: AuthCredentials,
        client: Client,
    ) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_owned(),
            credentials,
            client,
            retry: RetryPolicy::default(),
            current: Arc::new(RwLock::new(None)),
        }
    }

    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    /// Raw token for the Authorization header, logging in again when the
    /// cached one is stale.
    pub async fn token(&self) -> Result<String> {
        {
            let current = self.current.read().await;
            if let Some(token) = current.as_ref() {
                if !token.requires_refresh() {
                    return Ok(token.token().to_owned());
                }
            }
        }

        let mut current = self.current.write().await;

        // another caller may have refreshed while we waited for the lock
        if let Some(token) = current.as_ref() {
            if !token.requires_refresh() {
                return Ok(token.token().to_owned());
            }
        }

        let token = self.login().await?;
        let raw = token.token().to_owned();
        *current = Some(token);
        Ok(raw)
    }

    /// Drop the cached token, forcing a fresh login on the next call.
    /// Used after the cluster rejects a request with 401.
    pub async fn invalidate(&self) {
        *self.current.write().await = None;
    }

    async fn login(&self) -> Result<AuthToken> {
        let url = format!("{}{}", self.base_url, AUTH_LOGIN_PATH);
        debug!(uid = self.credentials.uid(), url = %url, "authenticating");

        let response = self
            .retry
            .run(|| async {
                let response = self
                    .client
                    .post(&url)
                    .json(&self.credentials)
                    .send()
                    .await?;

                if !response.status().is_success() {
                    return Err(anyhow!("login failed: {}", response.status()));
                }
                Ok(response.json::<LoginResponse>().await?)
            })
            .await?;

        let token = AuthToken::parse(&response.token)
            .context("IAM returned a malformed auth token")?;
        info!(
            uid = self.credentials.uid(),
            expires_at = token.expires_at(),
            "authenticated"
        );
        Ok(token)
    }
}
