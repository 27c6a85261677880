//! Content-negotiation checks shared by the boat and load controllers.

use axum::http::{header, HeaderMap};

use crate::server::error::AppError;

/// Requires the client to accept `application/json`.
///
/// A request without an `Accept` header accepts anything and passes. Wildcard
/// media ranges (`*/*`, `application/*`) also pass.
///
/// # Returns
/// - `Ok(())` - JSON is acceptable to the client
/// - `Err(AppError::NotAcceptable)` - 406, client demanded something else
pub fn require_json_accept(headers: &HeaderMap) -> Result<(), AppError> {
    let Some(accept) = headers.get(header::ACCEPT).and_then(|v| v.to_str().ok()) else {
        return Ok(());
    };

    let acceptable = accept.split(',').any(|range| {
        let media = range.trim().split(';').next().unwrap_or("").trim();
        matches!(media, "application/json" | "application/*" | "*/*")
    });

    if acceptable {
        Ok(())
    } else {
        Err(AppError::NotAcceptable)
    }
}

/// Requires the request to declare a JSON body.
///
/// The API refuses any request whose `Content-Type` is not
/// `application/json`, including bodyless GETs on the collection routes; that
/// strictness is part of the documented contract.
///
/// # Returns
/// - `Ok(())` - request declared `application/json`
/// - `Err(AppError::UnsupportedMediaType)` - 415 otherwise
pub fn require_json_content(headers: &HeaderMap) -> Result<(), AppError> {
    let declared = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.split(';').next().unwrap_or("").trim() == "application/json")
        .unwrap_or(false);

    if declared {
        Ok(())
    } else {
        Err(AppError::UnsupportedMediaType)
    }
}
