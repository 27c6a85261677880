//! SeaORM entity models for the marina API.
//!
//! Boats and loads are stored as flat rows with their cross-references kept in
//! nullable JSON columns (`boat.loads` and `load.carrier`), mirroring the
//! document shapes the API serves. Referential consistency between the two
//! columns is maintained by the data and service layers, not by the schema.

pub mod boat;
pub mod load;

pub mod prelude;
