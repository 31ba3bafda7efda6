//! Bearer-token issuance
//!
//! The token service is a black-box collaborator: given client credentials
//! it returns a bearer token or fails. The trait seam lets tests substitute
//! a canned provider; the production implementation posts an OAuth2
//! client-credentials request to the configured token endpoint.
//!
//! The coordinator calls the provider exactly once per batch and shares the
//! token read-only across all order attempts in that batch.

use crate::adapters::netsuite::models::TokenResponse;
use crate::config::NetSuiteConfig;
use crate::domain::{MeridianError, Result};
use async_trait::async_trait;
use secrecy::ExposeSecret;
use std::fmt;
use std::time::Duration;

/// A bearer token issued for one batch
///
/// Debug output is redacted so the token never lands in logs.
#[derive(Clone)]
pub struct AccessToken(String);

impl AccessToken {
    /// Wrap a raw token value
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// The raw token value, for building the Authorization header
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken([REDACTED])")
    }
}

/// Token issuance seam
#[async_trait]
pub trait TokenProvider: Send + Sync {
    /// Obtain a bearer token
    ///
    /// # Errors
    ///
    /// Returns [`MeridianError::Token`] when issuance fails. A failure here
    /// aborts the whole batch before any callout.
    async fn issue_token(&self) -> Result<AccessToken>;
}

/// OAuth2 client-credentials token provider
pub struct OAuthTokenProvider {
    client: reqwest::Client,
    token_url: String,
    client_id: String,
    client_secret: crate::config::SecretString,
}

impl OAuthTokenProvider {
    /// Create a provider from the NetSuite configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(config: &NetSuiteConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder().timeout(Duration::from_secs(30));

        if !config.tls_verify {
            builder = builder.danger_accept_invalid_certs(true);
        }

        let client = builder.build().map_err(|e| {
            MeridianError::Configuration(format!("Failed to build HTTP client: {e}"))
        })?;

        Ok(Self {
            client,
            token_url: config.token_url.clone(),
            client_id: config.client_id.clone(),
            client_secret: config.client_secret.clone(),
        })
    }
}

#[async_trait]
impl TokenProvider for OAuthTokenProvider {
    async fn issue_token(&self) -> Result<AccessToken> {
        tracing::debug!(token_url = %self.token_url, "Requesting bearer token");

        let params = [
            ("grant_type", "client_credentials"),
            ("client_id", self.client_id.as_str()),
            ("client_secret", self.client_secret.expose_secret().as_ref()),
        ];

        let response = self
            .client
            .post(&self.token_url)
            .form(&params)
            .send()
            .await
            .map_err(|e| MeridianError::Token(format!("Token request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(MeridianError::Token(format!(
                "Token endpoint returned status {status}: {body}"
            )));
        }

        let token: TokenResponse = response
            .json()
            .await
            .map_err(|e| MeridianError::Token(format!("Invalid token response: {e}")))?;

        if token.access_token.is_empty() {
            return Err(MeridianError::Token(
                "Token endpoint returned an empty access_token".to_string(),
            ));
        }

        tracing::debug!(expires_in = ?token.expires_in, "Bearer token issued");

        Ok(AccessToken::new(token.access_token))
    }
}
