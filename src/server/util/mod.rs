pub mod links;
pub mod negotiate;
