pub use super::boat::Entity as Boat;
pub use super::load::Entity as Load;
