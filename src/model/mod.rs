//! Externally-visible JSON representations.
//!
//! DTOs carry the hyperlinked shapes the API serves; they are built from
//! entity models plus the configured application origin and never travel the
//! other way (request bodies arrive as raw JSON for the validation layer).

pub mod api;
pub mod boat;
pub mod load;
