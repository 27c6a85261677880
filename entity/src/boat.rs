use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Reference to a load carried by a boat.
///
/// Stored inside the boat's `loads` JSON column as `{"id": <load id>}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult)]
pub struct LoadRef {
    pub id: i32,
}

/// Ordered list of load references carried by a boat.
///
/// The column is null rather than an empty list when the boat carries nothing;
/// callers collapse the list back to null when the last reference is removed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult)]
pub struct LoadRefs(pub Vec<LoadRef>);

impl LoadRefs {
    /// Returns true when the list holds a reference to the given load.
    pub fn contains(&self, load_id: i32) -> bool {
        self.0.iter().any(|r| r.id == load_id)
    }
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "boat")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Unique display name, at most 30 characters of `[A-Za-z0-9 ]`.
    pub name: String,
    /// Boat type, same length and character rules as `name` but not unique.
    #[sea_orm(column_name = "type")]
    pub boat_type: String,
    /// Hull length, always positive once persisted.
    pub length: f64,
    /// Subject of the principal that created the boat. Immutable.
    pub owner: String,
    /// References to carried loads, or null when the boat carries nothing.
    #[sea_orm(column_type = "Json", nullable)]
    pub loads: Option<LoadRefs>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
