use async_trait::async_trait;
use serde::Deserialize;

use crate::server::error::auth::AuthError;

/// Authenticated caller identity, as reported by the identity provider.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Principal {
    /// Stable subject identifier; boats record this as their `owner`.
    pub sub: String,
}

/// Resolves a bearer token to a principal.
///
/// Injected through `AppState` so handlers never talk to the identity
/// provider directly and tests can substitute a stub.
#[async_trait]
pub trait TokenVerifier: Send + Sync {
    /// Verifies the raw token (without the `Bearer ` prefix).
    ///
    /// # Returns
    /// - `Ok(Principal)`: Token accepted
    /// - `Err(AuthError)`: Token missing standing with the provider
    async fn verify(&self, token: &str) -> Result<Principal, AuthError>;
}

/// Verifier that defers to the identity provider's `userinfo` endpoint.
///
/// Presents the token as-is; a 2xx response with a `sub` claim accepts it,
/// anything else rejects it. Token issuance and refresh are the provider's
/// business, not this service's.
pub struct UserinfoVerifier {
    http: reqwest::Client,
    userinfo_url: String,
}

impl UserinfoVerifier {
    /// # Arguments
    /// - `http`: Shared HTTP client
    /// - `auth_domain`: Identity provider domain, e.g. `tenant.auth0.com`
    pub fn new(http: reqwest::Client, auth_domain: &str) -> Self {
        Self {
            http,
            userinfo_url: format!("https://{auth_domain}/userinfo"),
        }
    }
}

#[derive(Deserialize)]
struct UserinfoResponse {
    sub: String,
}

#[async_trait]
impl TokenVerifier for UserinfoVerifier {
    async fn verify(&self, token: &str) -> Result<Principal, AuthError> {
        let response = self
            .http
            .get(&self.userinfo_url)
            .bearer_auth(token)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(AuthError::InvalidToken);
        }

        let info: UserinfoResponse = response.json().await?;
        Ok(Principal { sub: info.sub })
    }
}
