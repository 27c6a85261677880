use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Reference to the boat carrying a load.
///
/// Stored inside the load's `carrier` JSON column as `[{"id": <boat id>}]`.
/// The carrier is a single-element list in the serialized representation, so
/// the wrapper keeps the list shape rather than a bare id.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult)]
pub struct BoatRef {
    pub id: i32,
}

/// Carrier slot of a load: a single-element list of boat references.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult)]
pub struct Carrier(pub Vec<BoatRef>);

impl Carrier {
    /// Builds a carrier slot pointing at the given boat.
    pub fn boat(boat_id: i32) -> Self {
        Self(vec![BoatRef { id: boat_id }])
    }

    /// Returns the id of the carrying boat, if the slot is well formed.
    pub fn boat_id(&self) -> Option<i32> {
        self.0.first().map(|r| r.id)
    }
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "load")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Cargo volume, always positive once persisted.
    pub volume: f64,
    /// Free-text description, at most 75 characters.
    pub content: String,
    /// Creation date in `MM/DD/YYYY` format, kept as an opaque string.
    pub creation_date: String,
    /// Reference to the carrying boat, or null while unassigned.
    #[sea_orm(column_type = "Json", nullable)]
    pub carrier: Option<Carrier>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
