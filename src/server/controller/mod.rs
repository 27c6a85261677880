//! HTTP request handlers.
//!
//! Controllers run the access and content-negotiation checks, apply the
//! request-body shape rules, and convert entity models to DTOs. Business
//! rules live one layer down in the services.

pub mod boat;
pub mod load;

use axum::response::Response;
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::server::error::AppError;

/// Body carried the wrong number of attributes for the request kind.
pub(crate) const INVALID_ATTRIBUTE_COUNT: &str =
    "The request object contains invalid number of attributes";
/// Body left out at least one required attribute.
pub(crate) const MISSING_ATTRIBUTES: &str =
    "The request object is missing at least one of the required attributes";

/// Query parameters accepted by the collection listings.
#[derive(Deserialize)]
pub(crate) struct PageQuery {
    pub cursor: Option<String>,
}

/// Parses a raw request body into a JSON object.
///
/// Invalid JSON and non-object bodies both fail the attribute-count rule,
/// since neither can satisfy it.
pub(crate) fn parse_body(raw: &str) -> Result<Map<String, Value>, AppError> {
    serde_json::from_str::<Value>(raw)
        .ok()
        .and_then(|v| v.as_object().cloned())
        .ok_or_else(|| AppError::BadRequest(INVALID_ATTRIBUTE_COUNT.to_string()))
}

/// Whether the body carries the attribute with a usable value.
///
/// Null and empty-string values count as absent. Numeric zero counts as
/// present so it reaches the range checks instead of reading as a missing
/// attribute.
pub(crate) fn has_attr(body: &Map<String, Value>, key: &str) -> bool {
    match body.get(key) {
        Some(Value::String(s)) => !s.is_empty(),
        Some(v) => !v.is_null(),
        None => false,
    }
}

/// Decodes the pagination cursor into a page offset.
///
/// The token is opaque to clients; an unparseable one is a client error, not
/// an empty page.
pub(crate) fn parse_cursor(cursor: Option<&str>) -> Result<u64, AppError> {
    match cursor {
        None => Ok(0),
        Some(c) => c
            .parse()
            .map_err(|_| AppError::BadRequest("The cursor parameter is invalid".to_string())),
    }
}

/// Handler for unsupported verbs on the collection URLs.
///
/// Collection-level PATCH, PUT, and DELETE are a deliberate 405 advertising
/// `GET, POST`, not a missing route.
pub(crate) async fn collection_method_not_allowed() -> Response {
    AppError::method_not_allowed()
}
