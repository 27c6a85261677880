//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic
//! for transforming errors into appropriate HTTP responses. The `AppError`
//! enum serves as the top-level error type that wraps domain-specific errors
//! and implements `IntoResponse` for automatic error handling in API
//! endpoints. Every failure path in the resource layer is a typed variant
//! here; nothing panics its way out of a handler.

pub mod auth;
pub mod config;
pub mod validation;

use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{auth::AuthError, config::ConfigError, validation::ValidationError},
};

/// Top-level application error type.
///
/// Aggregates all error types that can occur while serving a request and
/// provides automatic conversion to HTTP responses. Infrastructure errors
/// (`Db`, `Config`, `Http`, `Io`) map to 500 with details logged server-side;
/// the remaining variants carry the exact status codes and bodies of the
/// boat/load API contract.
#[derive(Error, Debug)]
pub enum AppError {
    /// Bearer-token extraction or verification failure.
    ///
    /// Always surfaces as 401 Unauthorized with a generic message, whether
    /// the token was missing, rejected, or the identity provider was
    /// unreachable.
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Database operation error from SeaORM.
    ///
    /// Results in 500 Internal Server Error with error details logged
    /// server-side.
    #[error(transparent)]
    Db(#[from] sea_orm::DbErr),

    /// HTTP client error from reqwest, outside of token verification.
    #[error(transparent)]
    Http(#[from] reqwest::Error),

    /// I/O error while binding or serving.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// A field of a boat or load representation failed validation.
    ///
    /// Results in 400 Bad Request with the failing check's message.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Another boat already uses the requested name.
    ///
    /// Results in 403 Forbidden; the uniqueness scan runs before field
    /// validation, so this wins over any field error.
    #[error("A boat with the specified name already exists")]
    DuplicateName,

    /// The authenticated principal does not own the targeted boat.
    ///
    /// Results in 401 Unauthorized with the same body as a bad token, so
    /// callers cannot distinguish foreign boats from auth failures.
    #[error("Caller does not own this boat")]
    OwnershipMismatch,

    /// Resource id does not exist.
    ///
    /// Results in 404 Not Found with the provided message.
    #[error("{0}")]
    NotFound(String),

    /// Relationship conflict: the load already has a carrier.
    ///
    /// Results in 403 Forbidden; no state is changed.
    #[error("The load has already been assigned to a boat")]
    LoadAlreadyAssigned,

    /// Relationship conflict: the load is not carried by the named boat.
    ///
    /// Results in 403 Forbidden; no state is changed.
    #[error("The load is not assigned to the specified boat")]
    LoadNotAssignedToBoat,

    /// The client does not accept `application/json`.
    #[error("Not Acceptable")]
    NotAcceptable,

    /// The request body is not `application/json`.
    #[error("Server only accepts application/json data.")]
    UnsupportedMediaType,

    /// Malformed request body (wrong attribute count, missing attributes,
    /// unparseable cursor).
    ///
    /// Results in 400 Bad Request with the provided message.
    #[error("{0}")]
    BadRequest(String),
}

/// Converts application errors into HTTP responses.
///
/// Error bodies use the `{"Error": "..."}` shape throughout, except for the
/// content-negotiation failures which reply with plain text. Internal errors
/// are logged with full details but return a generic message to the client.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::Auth(err) => err.into_response(),
            Self::Validation(err) => error_json(StatusCode::BAD_REQUEST, &err.to_string()),
            Self::BadRequest(msg) => error_json(StatusCode::BAD_REQUEST, &msg),
            Self::NotFound(msg) => error_json(StatusCode::NOT_FOUND, &msg),
            Self::OwnershipMismatch => {
                error_json(StatusCode::UNAUTHORIZED, "Missing or invalid JWT")
            }
            Self::DuplicateName | Self::LoadAlreadyAssigned | Self::LoadNotAssignedToBoat => {
                error_json(StatusCode::FORBIDDEN, &self.to_string())
            }
            Self::NotAcceptable => {
                (StatusCode::NOT_ACCEPTABLE, "Not Acceptable").into_response()
            }
            Self::UnsupportedMediaType => (
                StatusCode::UNSUPPORTED_MEDIA_TYPE,
                "Server only accepts application/json data.",
            )
                .into_response(),
            Self::Db(err) => {
                tracing::error!("Database error: {err}");
                internal_error()
            }
            Self::Http(err) => {
                tracing::error!("HTTP client error: {err}");
                internal_error()
            }
            Self::Io(err) => {
                tracing::error!("I/O error: {err}");
                internal_error()
            }
            Self::Config(err) => {
                tracing::error!("Configuration error: {err}");
                internal_error()
            }
        }
    }
}

impl AppError {
    /// Builds a 405 Method Not Allowed response advertising the collection
    /// verbs. Collection URLs only support GET and POST; the allowed set is
    /// sent in the `Accept` header to match the API contract.
    pub fn method_not_allowed() -> Response {
        let mut res = StatusCode::METHOD_NOT_ALLOWED.into_response();
        res.headers_mut()
            .insert(header::ACCEPT, HeaderValue::from_static("GET, POST"));
        res
    }
}

fn error_json(status: StatusCode, message: &str) -> Response {
    (
        status,
        Json(ErrorDto {
            error: message.to_string(),
        }),
    )
        .into_response()
}

fn internal_error() -> Response {
    error_json(
        StatusCode::INTERNAL_SERVER_ERROR,
        "An internal server error occurred",
    )
}
