use axum::http::{header, HeaderMap};

use crate::server::{
    error::{auth::AuthError, AppError},
    service::token::{Principal, TokenVerifier},
    state::AppState,
};

/// Guard requiring a verified bearer token on a request.
///
/// Handlers for owner-scoped routes construct one from the request headers
/// and call `require()`; routes without an ownership concept skip it
/// entirely.
pub struct AuthGuard<'a> {
    verifier: &'a dyn TokenVerifier,
    headers: &'a HeaderMap,
}

impl<'a> AuthGuard<'a> {
    pub fn new(state: &'a AppState, headers: &'a HeaderMap) -> Self {
        Self {
            verifier: state.verifier.as_ref(),
            headers,
        }
    }

    /// Extracts the bearer token and verifies it with the injected verifier.
    ///
    /// # Returns
    /// - `Ok(Principal)`: The authenticated caller
    /// - `Err(AppError)`: 401 for a missing, malformed, or rejected token
    pub async fn require(&self) -> Result<Principal, AppError> {
        let header = self
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .ok_or(AuthError::MissingBearer)?;

        let token = header
            .strip_prefix("Bearer ")
            .ok_or(AuthError::MissingBearer)?;

        Ok(self.verifier.verify(token).await?)
    }
}
