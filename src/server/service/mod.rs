//! Business logic orchestration between controllers and the data layer.
//!
//! Services own the rules the schema cannot express: field validation and its
//! fixed check order, the boat-name uniqueness scan, and the carrier/loads
//! symmetry between the two entity kinds. Every mutation touching both kinds
//! runs inside a single transaction so a failure cannot leave a dangling
//! reference.

pub mod assignment;
pub mod boat;
pub mod load;
pub mod token;
pub mod validation;
