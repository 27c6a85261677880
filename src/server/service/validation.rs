//! Field validation for boat and load request bodies.
//!
//! Bodies arrive as raw JSON objects rather than typed DTOs so that a
//! wrongly-typed attribute (a numeric name, a string length) produces the
//! contract's field message instead of a deserialization error. Checks run in
//! a fixed order and the first failure wins: name → type → length for boats,
//! content → creation_date → volume for loads.
//!
//! Partial updates default absent attributes to benign values (empty strings,
//! zero, a well-formed date) and relax the positivity checks to permit
//! exactly zero. That asymmetry is observable API behavior, not a bug.

use serde_json::{Map, Value};

use crate::server::{
    error::validation::ValidationError,
    model::{
        boat::{BoatFields, BoatPatch},
        load::{LoadFields, LoadPatch},
    },
};

/// Maximum character count for boat `name` and `type`.
const MAX_BOAT_STR: usize = 30;
/// Maximum character count for load `content`.
const MAX_CONTENT: usize = 75;
/// Defaulted `creation_date` for partial updates with no date attribute.
const PATCH_DATE_DEFAULT: &str = "01/01/2021";

/// Validates a create or full-replace boat body and extracts its fields.
///
/// The caller has already checked attribute presence, so every field is
/// expected; a missing one fails its own check.
pub fn boat_create(body: &Map<String, Value>) -> Result<BoatFields, ValidationError> {
    check_boat_string(body.get("name"), false, Field::Name)?;
    check_boat_string(body.get("type"), false, Field::Type)?;
    check_length(body.get("length"), false)?;

    Ok(BoatFields {
        name: string_attr(body, "name"),
        boat_type: string_attr(body, "type"),
        length: number_attr(body, "length"),
    })
}

/// Validates a partial boat update and extracts the supplied fields.
pub fn boat_patch(body: &Map<String, Value>) -> Result<BoatPatch, ValidationError> {
    check_boat_string(body.get("name"), true, Field::Name)?;
    check_boat_string(body.get("type"), true, Field::Type)?;
    check_length(body.get("length"), true)?;

    Ok(BoatPatch {
        name: body.get("name").and_then(Value::as_str).map(str::to_string),
        boat_type: body.get("type").and_then(Value::as_str).map(str::to_string),
        length: body.get("length").and_then(Value::as_f64),
    })
}

/// Validates a create or full-replace load body and extracts its fields.
pub fn load_create(body: &Map<String, Value>) -> Result<LoadFields, ValidationError> {
    check_content(body.get("content"), false)?;
    check_date(body.get("creation_date"), false)?;
    check_volume(body.get("volume"), false)?;

    Ok(LoadFields {
        volume: number_attr(body, "volume"),
        content: string_attr(body, "content"),
        creation_date: string_attr(body, "creation_date"),
    })
}

/// Validates a partial load update and extracts the supplied fields.
pub fn load_patch(body: &Map<String, Value>) -> Result<LoadPatch, ValidationError> {
    check_content(body.get("content"), true)?;
    check_date(body.get("creation_date"), true)?;
    check_volume(body.get("volume"), true)?;

    Ok(LoadPatch {
        volume: body.get("volume").and_then(Value::as_f64),
        content: body
            .get("content")
            .and_then(Value::as_str)
            .map(str::to_string),
        creation_date: body
            .get("creation_date")
            .and_then(Value::as_str)
            .map(str::to_string),
    })
}

/// The boat name supplied by a body, for the duplicate scan.
///
/// Only string values can collide with stored names; a wrongly-typed name
/// falls through to field validation instead.
pub fn candidate_name(body: &Map<String, Value>) -> Option<&str> {
    body.get("name").and_then(Value::as_str)
}

enum Field {
    Name,
    Type,
}

fn check_boat_string(
    value: Option<&Value>,
    is_patch: bool,
    field: Field,
) -> Result<(), ValidationError> {
    let (not_string, special) = match field {
        Field::Name => (
            ValidationError::NameNotString,
            ValidationError::NameSpecialChars,
        ),
        Field::Type => (
            ValidationError::TypeNotString,
            ValidationError::TypeSpecialChars,
        ),
    };

    let s = match value {
        None if is_patch => "",
        Some(Value::String(s)) => s,
        _ => return Err(not_string),
    };

    if s.chars().count() > MAX_BOAT_STR {
        return Err(not_string);
    }
    if !is_clean(s) {
        return Err(special);
    }
    Ok(())
}

fn check_length(value: Option<&Value>, is_patch: bool) -> Result<(), ValidationError> {
    check_positive(value, is_patch, ValidationError::LengthOutOfRange)
}

fn check_volume(value: Option<&Value>, is_patch: bool) -> Result<(), ValidationError> {
    check_positive(value, is_patch, ValidationError::VolumeOutOfRange)
}

fn check_positive(
    value: Option<&Value>,
    is_patch: bool,
    err: ValidationError,
) -> Result<(), ValidationError> {
    let n = match value {
        None if is_patch => 0.0,
        Some(v) => v.as_f64().ok_or_else(|| err.clone())?,
        None => return Err(err),
    };

    // Partial updates permit exactly zero; create and full replace do not.
    let in_range = if is_patch { n >= 0.0 } else { n > 0.0 };
    if in_range {
        Ok(())
    } else {
        Err(err)
    }
}

fn check_content(value: Option<&Value>, is_patch: bool) -> Result<(), ValidationError> {
    let s = match value {
        None if is_patch => "",
        Some(Value::String(s)) => s,
        _ => return Err(ValidationError::ContentNotString),
    };

    if s.chars().count() > MAX_CONTENT {
        return Err(ValidationError::ContentNotString);
    }
    Ok(())
}

fn check_date(value: Option<&Value>, is_patch: bool) -> Result<(), ValidationError> {
    let s = match value {
        None if is_patch => PATCH_DATE_DEFAULT,
        Some(Value::String(s)) => s,
        _ => return Err(ValidationError::DateNotString),
    };

    if is_valid_date(s) {
        Ok(())
    } else {
        Err(ValidationError::DateBadFormat)
    }
}

/// Only letters, digits, and spaces are allowed in boat names and types.
fn is_clean(s: &str) -> bool {
    s.chars().all(|c| c.is_ascii_alphanumeric() || c == ' ')
}

/// Naive `MM/DD/YYYY` shape check: month 01-12, day 01-31, four-digit year.
///
/// The day is only range-checked, never validated against the month, so
/// `02/30/2024` passes. The empty string also passes. Both quirks are part of
/// the documented contract.
fn is_valid_date(date: &str) -> bool {
    if date.is_empty() {
        return true;
    }

    let bytes = date.as_bytes();
    if bytes.len() != 10 || bytes[2] != b'/' || bytes[5] != b'/' {
        return false;
    }
    if ![0usize, 1, 3, 4, 6, 7, 8, 9]
        .iter()
        .all(|&i| bytes[i].is_ascii_digit())
    {
        return false;
    }

    let month: u8 = date[0..2].parse().unwrap_or(0);
    let day: u8 = date[3..5].parse().unwrap_or(0);
    (1..=12).contains(&month) && (1..=31).contains(&day)
}

fn string_attr(body: &Map<String, Value>, key: &str) -> String {
    body.get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

fn number_attr(body: &Map<String, Value>, key: &str) -> f64 {
    body.get(key).and_then(Value::as_f64).unwrap_or_default()
}
