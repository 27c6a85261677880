//! Operation parameter types passed from the controller layer into the data
//! layer after validation.

pub mod boat;
pub mod load;
