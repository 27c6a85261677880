use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Bearer-token authentication failures.
#[derive(Error, Debug)]
pub enum AuthError {
    /// The request carried no `Authorization: Bearer` header.
    #[error("Request is missing a bearer token")]
    MissingBearer,

    /// The identity provider rejected the presented token.
    #[error("Bearer token was rejected by the identity provider")]
    InvalidToken,

    /// The identity provider could not be reached or returned garbage.
    ///
    /// Surfaced as unauthorized rather than a server error so a flapping
    /// provider cannot be distinguished from a bad token by probing.
    #[error("Identity provider request failed: {0}")]
    Upstream(#[from] reqwest::Error),
}

/// Converts authentication errors into HTTP responses.
///
/// Every variant maps to 401 Unauthorized with the same generic body. The
/// underlying cause is logged at debug level for diagnostics.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("Authentication failure: {self}");
        (
            StatusCode::UNAUTHORIZED,
            Json(ErrorDto {
                error: "Missing or invalid JWT".to_string(),
            }),
        )
            .into_response()
    }
}
