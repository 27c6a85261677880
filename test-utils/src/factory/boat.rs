//! Boat factory for creating test boat entities.

use entity::boat::LoadRefs;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Factory for creating test boats with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::boat::BoatFactory;
///
/// let boat = BoatFactory::new(&db, "auth0|captain")
///     .name("Orca")
///     .boat_type("Sailboat")
///     .length(12.0)
///     .build()
///     .await?;
/// ```
pub struct BoatFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    boat_type: String,
    length: f64,
    owner: String,
    loads: Option<LoadRefs>,
}

impl<'a> BoatFactory<'a> {
    /// Creates a new BoatFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Boat {n}"` where n is a process-unique counter
    /// - boat_type: `"Sloop"`
    /// - length: `28.0`
    /// - loads: `None`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `owner` - Subject of the owning principal
    pub fn new(db: &'a DatabaseConnection, owner: &str) -> Self {
        Self {
            db,
            name: format!("Boat {}", next_id()),
            boat_type: "Sloop".to_string(),
            length: 28.0,
            owner: owner.to_string(),
            loads: None,
        }
    }

    /// Overrides the boat name.
    pub fn name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    /// Overrides the boat type.
    pub fn boat_type(mut self, boat_type: &str) -> Self {
        self.boat_type = boat_type.to_string();
        self
    }

    /// Overrides the boat length.
    pub fn length(mut self, length: f64) -> Self {
        self.length = length;
        self
    }

    /// Sets the stored load reference list directly.
    ///
    /// Does not touch the referenced loads' carrier columns; combine with
    /// `LoadFactory::carrier` when a symmetric pair is wanted.
    pub fn loads(mut self, loads: Option<LoadRefs>) -> Self {
        self.loads = loads;
        self
    }

    /// Inserts the boat into the database.
    ///
    /// # Returns
    /// - `Ok(Model)` - The created boat
    /// - `Err(DbErr)` - Database error
    pub async fn build(self) -> Result<entity::boat::Model, DbErr> {
        entity::boat::ActiveModel {
            name: ActiveValue::Set(self.name),
            boat_type: ActiveValue::Set(self.boat_type),
            length: ActiveValue::Set(self.length),
            owner: ActiveValue::Set(self.owner),
            loads: ActiveValue::Set(self.loads),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a boat with default values for the given owner.
pub async fn create_boat(
    db: &DatabaseConnection,
    owner: &str,
) -> Result<entity::boat::Model, DbErr> {
    BoatFactory::new(db, owner).build().await
}
